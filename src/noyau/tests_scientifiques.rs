//! Tests scientifiques (campagne) : propriétés de bout en bout + limites contrôlées.
//!
//! But : vérifier le pipeline complet (texte -> lignes) sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (nombre de termes, chiffres des littéraux)
//! - précision bornée (DIGITS_MAX)
//!
//! Notes :
//! - les racines exactes sortent en fractions ("1/2"), les irrationnelles en décimales tronquées.
//! - un degré > 2 est un résultat normal, pas une erreur.

use std::time::{Duration, Instant};

use super::erreur::ErreurEquation;
use super::fraction::Fraction;
use super::reglages::{Reglages, DIGITS_MAX};
use super::solveur::{Racine, Solution, Valeur};
use super::{resoudre_equation, Rapport};

fn ok(eq: &str) -> Rapport {
    ok_avec(eq, &Reglages::default())
}

fn ok_avec(eq: &str, reglages: &Reglages) -> Rapport {
    resoudre_equation(eq, reglages).unwrap_or_else(|e| panic!("eq={eq:?} err={e}"))
}

/// Dernière ligne de sortie (la phrase de résultat).
fn resultat(eq: &str) -> String {
    let r = ok(eq);
    r.lignes(&Reglages::default()).pop().unwrap_or_default()
}

fn exactes(eq: &str) -> Vec<Fraction> {
    match ok(eq).resolution.solution {
        Solution::Racines(v) => v
            .into_iter()
            .map(|r| match r {
                Racine::Reelle(Valeur::Exacte(f)) => f,
                autre => panic!("eq={eq:?} : racine exacte attendue, obtenu {autre:?}"),
            })
            .collect(),
        autre => panic!("eq={eq:?} : racines attendues, obtenu {autre:?}"),
    }
}

fn f(n: i64, d: i64) -> Fraction {
    Fraction::nouvelle(n, d).unwrap()
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Propriétés de référence ------------------------ */

#[test]
fn sci_carre_parfait() {
    let r = ok("X^2 - 4 = 0");
    assert_eq!(r.degre, 2);
    assert_eq!(r.polynome.coefficient(2), Fraction::entier(1));
    assert_eq!(r.polynome.coefficient(0), Fraction::entier(-4));
    assert_eq!(r.polynome.coefficients().len(), 2);
    assert_eq!(r.resolution.discriminant, Some(Fraction::entier(16)));
    assert_eq!(exactes("X^2 - 4 = 0"), vec![f(2, 1), f(-2, 1)]);
}

#[test]
fn sci_degre_un() {
    let r = ok("2*X + 6 = 0");
    assert_eq!(r.degre, 1);
    assert_eq!(exactes("2*X + 6 = 0"), vec![f(-3, 1)]);
}

#[test]
fn sci_degre_zero() {
    let r = ok("5 = 5");
    assert_eq!(r.degre, 0);
    assert_eq!(r.resolution.solution, Solution::TousLesReels);

    let r = ok("5 = 6");
    assert_eq!(r.degre, 0);
    assert_eq!(r.resolution.solution, Solution::AucuneSolution);
}

#[test]
fn sci_complexes_approches() {
    let r = ok("X^2 + X + 1 = 0");
    assert_eq!(r.resolution.discriminant, Some(Fraction::entier(-3)));
    match &r.resolution.solution {
        Solution::Racines(v) => {
            for (racine, signe) in v.iter().zip([1.0, -1.0]) {
                match racine {
                    Racine::Complexe { re, im } => {
                        assert_eq!(re, &Valeur::Exacte(f(-1, 2)));
                        assert!(!im.est_exacte());
                        let attendu = signe * 3f64.sqrt() / 2.0;
                        assert!((im.vers_f64() - attendu).abs() < 1e-5);
                    }
                    autre => panic!("complexe attendu: {autre:?}"),
                }
            }
        }
        autre => panic!("racines attendues: {autre:?}"),
    }
}

#[test]
fn sci_degre_trois_non_supporte() {
    let r = ok("X^3 - 1 = 0");
    assert_eq!(r.degre, 3);
    assert_eq!(r.resolution.solution, Solution::NonSupporte(3));
    assert_eq!(r.resolution.discriminant, None);
    assert_eq!(
        resultat("X^3 - 1 = 0"),
        "Impossible de résoudre : le degré 3 dépasse 2."
    );
}

#[test]
fn sci_equivalence_regroupement() {
    assert_eq!(ok("X + X = 2").polynome, ok("2*X = 2").polynome);
    assert_eq!(ok("x^2 + 3x^2 = 0").polynome, ok("4X^2 = 0").polynome);
}

#[test]
fn sci_degre_egale_puissance_max() {
    for (eq, d) in [
        ("X^5 = X^5 + X^2", 2),
        ("0 * X^7 + 1 = X", 1),
        ("X^4 + X = X^4", 1),
        ("2 = X^0", 0),
    ] {
        let r = ok(eq);
        assert_eq!(r.degre, d, "eq={eq:?}");
        let max = r.polynome.coefficients().keys().next_back().copied().unwrap_or(0);
        assert_eq!(r.degre, max, "eq={eq:?}");
    }
}

/* ------------------------ Rendu des complexes ------------------------ */

#[test]
fn sci_complexes_exacts() {
    assert_eq!(
        resultat("X^2 + 2X + 5 = 0"),
        "Discriminant strictement négatif, les deux solutions complexes sont : -1 + 2i, -1 - 2i"
    );
    assert_eq!(
        resultat("4X^2 + 4X + 5 = 0"),
        "Discriminant strictement négatif, les deux solutions complexes sont : -1/2 + i, -1/2 - i"
    );
    assert_eq!(
        resultat("4X^2 + 9 = 0"),
        "Discriminant strictement négatif, les deux solutions complexes sont : 3i/2, -3i/2"
    );
}

/* ------------------------ Relations de Viète (exactes) ------------------------ */

#[test]
fn sci_viete_exact() {
    // 6X² - 5X + 1 = 0 : 1/2 et 1/3 ; somme 5/6, produit 1/6
    let v = exactes("6X^2 - 5X + 1 = 0");
    assert_eq!(v, vec![f(1, 2), f(1, 3)]);
    assert_eq!(&v[0] + &v[1], f(5, 6));
    assert_eq!(&v[0] * &v[1], f(1, 6));
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_de_termes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut eq = String::new();
    for k in 0..400 {
        if k > 0 {
            eq.push_str(" + ");
        }
        eq.push('X');
        budget(t0, max);
    }
    eq.push_str(" = 200");

    // 400X = 200
    assert_eq!(exactes(&eq), vec![f(1, 2)]);
    budget(t0, max);
}

#[test]
fn sci_stress_bigint_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // gros coefficient contrôlé (100 chiffres) : X² = 1 exactement
    let big = "9".repeat(100);
    let eq = format!("{big} * X^2 - {big} = 0");
    assert_eq!(exactes(&eq), vec![f(1, 1), f(-1, 1)]);
    budget(t0, max);
}

#[test]
fn sci_stress_precision_max() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let reglages = Reglages::default().avec_chiffres(10_000);
    assert_eq!(reglages.chiffres, DIGITS_MAX);

    let r = ok_avec("X^2 = 2", &reglages);
    match &r.resolution.solution {
        Solution::Racines(v) => match &v[0] {
            Racine::Reelle(Valeur::Approchee(d)) => {
                let s = d.to_string();
                assert!(s.starts_with("1.41421356237309504880168872420969807856"));
                assert_eq!(s.len(), 2 + DIGITS_MAX);
            }
            autre => panic!("approchée attendue: {autre:?}"),
        },
        autre => panic!("racines attendues: {autre:?}"),
    }
    budget(t0, max);
}

#[test]
fn sci_exposant_litteral_borne() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    assert_eq!(exactes("1e4096 * X = 1e4096"), vec![f(1, 1)]);
    assert!(matches!(
        resoudre_equation("1e4097 * X = 1", &Reglages::default()),
        Err(ErreurEquation::LitteralHorsBornes(_))
    ));
    budget(t0, max);
}

/* ------------------------ Erreurs : ordre de validation ------------------------ */

#[test]
fn sci_ordre_des_controles() {
    let d = Reglages::default();
    let err = |s: &str| resoudre_equation(s, &d).unwrap_err();

    // caractère invalide avant le comptage des '='
    assert!(matches!(err("X # 1"), ErreurEquation::CaractereInvalide { .. }));
    // '=' avant variable
    assert_eq!(err("x + y"), ErreurEquation::EgalManquant);
    // variable avant membres / termes
    assert!(matches!(err("x + y ="), ErreurEquation::PlusieursVariables(_)));
    // membre vide avant termes
    assert_eq!(err("= X^"), ErreurEquation::MembreVide("gauche"));
    // termes de gauche à droite
    assert_eq!(
        err("X^ = X^-1"),
        ErreurEquation::TermeInvalide("X^".into())
    );
}
