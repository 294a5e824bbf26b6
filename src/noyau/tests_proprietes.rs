//! Tests de propriétés (proptest) : invariants du normaliseur et du solveur.
//!
//! - nombre de cas fixe (stabilité CI)
//! - coefficients entiers ou décimaux bornés (tout reste exact)
//! - Viète vérifié en exact quand les racines sont rationnelles,
//!   en f64 (tolérance) quand elles sont approchées

use proptest::prelude::*;

use super::equation::analyser;
use super::format::format_forme_reduite;
use super::fraction::Fraction;
use super::solveur::{resoudre, Racine, Solution, Valeur};

/// Tolérance des vérifications en f64 (valeurs à 6 chiffres tronqués).
const EPS: f64 = 1e-4;

/// Texte d'un coefficient décimal : entier / 10^k.
fn litteral(entier: i64, k: u32) -> String {
    let neg = entier < 0;
    let mut chiffres = entier.unsigned_abs().to_string();
    let k = k as usize;
    if k > 0 {
        while chiffres.len() <= k {
            chiffres.insert(0, '0');
        }
        chiffres.insert(chiffres.len() - k, '.');
    }
    if neg {
        format!("-{chiffres}")
    } else {
        chiffres
    }
}

fn membre(termes: &[(i64, u32, u32)]) -> String {
    if termes.is_empty() {
        return "0".to_string();
    }
    termes
        .iter()
        .map(|&(c, k, p)| format!("{} * X^{p}", litteral(c, k)))
        .collect::<Vec<_>>()
        .join(" + ")
}

fn racines(eq: &str) -> Vec<Racine> {
    let p = analyser(eq).unwrap_or_else(|e| panic!("eq={eq:?} err={e}"));
    match resoudre(&p, 6).unwrap_or_else(|e| panic!("eq={eq:?} err={e}")).solution {
        Solution::Racines(v) => v,
        autre => panic!("eq={eq:?} : racines attendues, obtenu {autre:?}"),
    }
}

fn terme_strategy() -> impl Strategy<Value = (i64, u32, u32)> {
    (-1000i64..1000, 0u32..4, 0u32..5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// La forme réduite se relit en le même polynôme.
    #[test]
    fn prop_relecture_forme_reduite(
        gauche in prop::collection::vec(terme_strategy(), 0..6),
        droite in prop::collection::vec(terme_strategy(), 0..6),
    ) {
        let eq = format!("{} = {}", membre(&gauche), membre(&droite));
        let p = analyser(&eq).unwrap_or_else(|e| panic!("eq={eq:?} err={e}"));
        let texte = format_forme_reduite(&p);
        let relu = analyser(&texte).unwrap_or_else(|e| panic!("texte={texte:?} err={e}"));

        prop_assert_eq!(relu.coefficients(), p.coefficients());
        prop_assert_eq!(relu.degre(), p.degre());
        let max = p.coefficients().keys().next_back().copied().unwrap_or(0);
        prop_assert_eq!(p.degre(), max);
    }

    /// n fois `kX^p` == `(n·k)X^p`.
    #[test]
    fn prop_regroupement(k in -50i64..50, n in 1usize..12, p in 0u32..4) {
        let somme = vec![format!("{k} * X^{p}"); n].join(" + ");
        let gauche = analyser(&format!("{somme} = 1")).unwrap();
        let droite = analyser(&format!("{} * X^{p} = 1", k * n as i64)).unwrap();
        prop_assert_eq!(gauche, droite);
    }

    /// Réduction idempotente, dénominateur > 0.
    #[test]
    fn prop_fraction_idempotente(
        n in -100_000i64..100_000,
        d in 1i64..100_000,
        neg in any::<bool>()
    ) {
        let d = if neg { -d } else { d };
        let x = Fraction::nouvelle(n, d).unwrap();
        let y = Fraction::nouvelle(x.numer().clone(), x.denom().clone()).unwrap();
        prop_assert_eq!(&x, &y);
        prop_assert!(x.denom() > &num_bigint::BigInt::from(0));
    }

    /// a(X - r1)(X - r2) = 0 : racines exactes, somme et produit de Viète.
    #[test]
    fn prop_viete_exact(a in 1i64..20, neg in any::<bool>(), r1 in -30i64..30, r2 in -30i64..30) {
        let a = if neg { -a } else { a };
        let b = -a * (r1 + r2);
        let c = a * r1 * r2;
        let eq = format!("{a} * X^2 + {b} * X + {c} = 0");

        let v: Vec<Fraction> = racines(&eq)
            .into_iter()
            .map(|r| match r {
                Racine::Reelle(Valeur::Exacte(f)) => f,
                autre => panic!("eq={eq:?} : racine exacte attendue, obtenu {autre:?}"),
            })
            .collect();

        if r1 == r2 {
            prop_assert_eq!(v, vec![Fraction::entier(r1)]);
        } else {
            prop_assert_eq!(v.len(), 2);
            prop_assert_eq!(&v[0] + &v[1], Fraction::entier(r1 + r2));
            prop_assert_eq!(&v[0] * &v[1], Fraction::entier(r1 * r2));
        }
    }

    /// Racines approchées : le polynôme s'y annule (à la troncature près).
    #[test]
    fn prop_racines_approchees(a in 1i64..10, b in -20i64..20, c in -20i64..20) {
        let delta = b * b - 4 * a * c;
        prop_assume!(delta > 0);
        prop_assume!(Fraction::entier(delta).racine_exacte().is_none());

        let eq = format!("{a} * X^2 + {b} * X + {c} = 0");
        let v = racines(&eq);
        prop_assert_eq!(v.len(), 2);
        for r in &v {
            match r {
                Racine::Reelle(x @ Valeur::Approchee(_)) => {
                    let x = x.vers_f64();
                    let val = (a as f64) * x * x + (b as f64) * x + c as f64;
                    // |P'| borné sur le domaine : résidu proportionnel à 10^-6
                    prop_assert!(val.abs() < EPS * 100.0, "eq={} x={} P(x)={}", eq, x, val);
                }
                autre => panic!("eq={eq:?} : approchée attendue, obtenu {autre:?}"),
            }
        }
        prop_assert_ne!(&v[0], &v[1]);
    }

    /// Δ < 0 : paire conjuguée, partie réelle exacte -b/2a.
    #[test]
    fn prop_complexes_conjugues(a in 1i64..10, b in -20i64..20, c in 1i64..40) {
        let delta = b * b - 4 * a * c;
        prop_assume!(delta < 0);

        let eq = format!("{a} * X^2 + {b} * X + {c} = 0");
        match racines(&eq).as_slice() {
            [Racine::Complexe { re: re1, im: im1 }, Racine::Complexe { re: re2, im: im2 }] => {
                let attendu = Fraction::nouvelle(-b, 2 * a).unwrap();
                prop_assert_eq!(re1, &Valeur::Exacte(attendu));
                prop_assert_eq!(re1, re2);
                prop_assert_eq!(&im1.oppose(), im2);
                let module = ((-delta) as f64).sqrt() / (2 * a) as f64;
                prop_assert!((im1.vers_f64() - module).abs() < EPS);
            }
            autre => panic!("eq={eq:?} : paire complexe attendue, obtenu {autre:?}"),
        }
    }
}

#[test]
fn litteraux_generes() {
    assert_eq!(litteral(-5, 2), "-0.05");
    assert_eq!(litteral(1234, 1), "123.4");
    assert_eq!(litteral(7, 0), "7");
}
