// src/noyau/format.rs
//
// Affichage : forme réduite, fractions, décimales, complexes, phrase finale.
// Aucune logique de calcul ici (tout vient du solveur).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

use super::fraction::Fraction;
use super::lecture::Decimale;
use super::polynome::Polynome;
use super::reglages::Reglages;
use super::solveur::{Racine, Resolution, Solution, Valeur};

/* ------------------------ Helpers rationnels ------------------------ */

fn format_rat_pretty(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// p/q * i -> pi/q ; i/q si p=1 ; ki si q=1 ; i si 1 (p > 0)
fn format_mul_rat_i(r: &BigRational) -> String {
    let p = r.numer();
    let q = r.denom();

    if p == &BigInt::one() {
        if q.is_one() {
            return "i".to_string();
        }
        return format!("i/{q}");
    }
    if q.is_one() {
        return format!("{p}i");
    }
    format!("{p}i/{q}")
}

/* ------------------------ Coefficients ------------------------ */

/// Coefficient exact : décimal fini si possible (9.3, -0.5), sinon n/d.
pub fn format_coefficient(c: &Fraction) -> String {
    c.vers_decimal_fini()
        .unwrap_or_else(|| format_rat_pretty(c.as_rational()))
}

/// Forme réduite : puissances croissantes, `coeff * X^p`, suffixe `= 0`.
///
/// Relisible par le normaliseur (mêmes coefficients) :
/// - coefficient 1 omis pour p > 0 (`X^2`, `- X^1`)
/// - polynôme nul : `0 * X^0 = 0`
pub fn format_forme_reduite(p: &Polynome) -> String {
    let v = p.variable();
    if p.est_nul() {
        return format!("0 * {v}^0 = 0");
    }

    let mut out = String::new();
    for (k, (puissance, c)) in p.coefficients().iter().enumerate() {
        let negatif = c.est_negatif();
        let module = format_coefficient(&c.abs());
        let monome = if c.abs().est_un() && *puissance > 0 {
            format!("{v}^{puissance}")
        } else {
            format!("{module} * {v}^{puissance}")
        };

        match (k, negatif) {
            (0, false) => out.push_str(&monome),
            (0, true) => {
                out.push('-');
                out.push_str(&monome);
            }
            (_, false) => {
                out.push_str(" + ");
                out.push_str(&monome);
            }
            (_, true) => {
                out.push_str(" - ");
                out.push_str(&monome);
            }
        }
    }
    out.push_str(" = 0");
    out
}

/* ------------------------ Valeurs ------------------------ */

/// Fraction : `n` ou `n/d` ; avec `decimales`, `n/d (≈ 0.333333)`.
pub fn format_fraction(f: &Fraction, reglages: &Reglages) -> String {
    let exact = format_rat_pretty(f.as_rational());
    if reglages.afficher_decimales && !f.est_entier() {
        let approx = Decimale::depuis_fraction(f, reglages.chiffres);
        format!("{exact} (≈ {approx})")
    } else {
        exact
    }
}

pub fn format_valeur(v: &Valeur, reglages: &Reglages) -> String {
    match v {
        Valeur::Exacte(f) => format_fraction(f, reglages),
        Valeur::Approchee(d) => d.to_string(),
    }
}

/// Module de la partie imaginaire, avec son `i`.
fn format_imaginaire(im: &Valeur) -> String {
    match im {
        Valeur::Exacte(f) => format_mul_rat_i(&f.as_rational().abs()),
        Valeur::Approchee(d) => format!("{}i", d.abs()),
    }
}

fn imaginaire_negatif(im: &Valeur) -> bool {
    match im {
        Valeur::Exacte(f) => f.est_negatif(),
        Valeur::Approchee(d) => d.est_negative(),
    }
}

/// Racine : réelle telle quelle ; complexe `re ± |im| i`, partie réelle nulle omise.
pub fn format_racine(r: &Racine, reglages: &Reglages) -> String {
    match r {
        Racine::Reelle(v) => format_valeur(v, reglages),
        Racine::Complexe { re, im } => {
            let i = format_imaginaire(im);
            let negatif = imaginaire_negatif(im);
            if re.est_nulle() {
                if negatif {
                    format!("-{i}")
                } else {
                    i
                }
            } else {
                let re = format_valeur(re, reglages);
                let signe = if negatif { '-' } else { '+' };
                format!("{re} {signe} {i}")
            }
        }
    }
}

/* ------------------------ Phrase finale ------------------------ */

/// Lignes de résultat (après forme réduite + degré).
pub fn format_resultat(res: &Resolution, reglages: &Reglages) -> Vec<String> {
    match &res.solution {
        Solution::TousLesReels => vec!["Tous les nombres réels sont solution.".to_string()],
        Solution::AucuneSolution => vec!["Aucune solution.".to_string()],
        Solution::NonSupporte(n) => {
            vec![format!("Impossible de résoudre : le degré {n} dépasse 2.")]
        }
        Solution::Racines(racines) => {
            let textes: Vec<String> = racines.iter().map(|r| format_racine(r, reglages)).collect();
            let complexes = racines.iter().any(|r| matches!(r, Racine::Complexe { .. }));

            match (textes.as_slice(), res.discriminant.is_some(), complexes) {
                ([x], true, _) => vec![
                    "Discriminant nul.".to_string(),
                    format!("La solution est : {x}"),
                ],
                ([x], false, _) => vec![format!("La solution est : {x}")],
                ([x1, x2], _, true) => vec![format!(
                    "Discriminant strictement négatif, les deux solutions complexes sont : {x1}, {x2}"
                )],
                ([x1, x2], _, false) => vec![format!(
                    "Discriminant strictement positif, les deux solutions sont : {x1}, {x2}"
                )],
                _ => vec![format!("Solutions : {}", textes.join(", "))],
            }
        }
    }
}
