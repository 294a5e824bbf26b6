// src/noyau/lecture.rs
//
// Lecture décimale (ΣLocal) : approximations à précision fixe, tronquées.
// Tout passe par des entiers “scalés” (×10^chiffres), jamais par f64.
// √ : Newton entier sur n·10^(2k)/d (voir fraction::racine_entiere).

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use std::fmt;

use super::erreur::ErreurEquation;
use super::fraction::{racine_entiere, Fraction};

/// Chiffres de garde pour amortir les erreurs de troncature.
const EXTRA: usize = 10;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// r -> entier “scalé” = trunc(r * 10^digits)
fn rational_scaled(r: &Fraction, digits: usize) -> BigInt {
    (r.numer() * pow10(digits)) / r.denom()
}

/// √r en entier scalé : floor(√r · 10^digits), r >= 0.
fn rational_sqrt_scaled(r: &Fraction, digits: usize) -> BigInt {
    if r.est_nul() || r.est_negatif() {
        return BigInt::zero();
    }
    // floor(√(floor(x))) == floor(√x) : on peut tronquer avant la racine
    let cible = (r.numer() * pow10(2 * digits)) / r.denom();
    racine_entiere(&cible)
}

/* ------------------------ Décimale (valeur approchée) ------------------------ */

/// Valeur approchée à précision fixe : scaled / 10^chiffres (tronquée vers 0).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimale {
    scaled: BigInt,
    chiffres: usize,
}

impl Decimale {
    pub fn depuis_fraction(r: &Fraction, chiffres: usize) -> Decimale {
        Decimale {
            scaled: rational_scaled(r, chiffres),
            chiffres,
        }
    }

    pub fn est_negative(&self) -> bool {
        self.scaled.is_negative()
    }

    pub fn est_nulle(&self) -> bool {
        self.scaled.is_zero()
    }

    pub fn abs(&self) -> Decimale {
        Decimale {
            scaled: self.scaled.abs(),
            chiffres: self.chiffres,
        }
    }

    pub fn oppose(&self) -> Decimale {
        Decimale {
            scaled: -&self.scaled,
            chiffres: self.chiffres,
        }
    }

    /// Lecture f64 (comparaisons grossières des tests).
    #[cfg(test)]
    pub(crate) fn vers_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Decimale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&scaled_to_decimal(self.scaled.clone(), self.chiffres))
    }
}

/// √r approchée (r >= 0).
pub fn racine_approchee(r: &Fraction, chiffres: usize) -> Decimale {
    let s = rational_sqrt_scaled(r, chiffres + EXTRA);
    Decimale {
        scaled: s / pow10(EXTRA),
        chiffres,
    }
}

/// (p + signe·√delta) / q, approchée à `chiffres` chiffres.
///
/// Calcul en Q sur l'échelle 10^(chiffres+EXTRA), une seule troncature finale.
/// Une valeur non nulle plus petite que 10^-chiffres n'est jamais rendue
/// comme 0 : l'échelle est étendue jusqu'au premier chiffre significatif,
/// puis `chiffres` chiffres significatifs sont gardés (3.16e-7 à 6 chiffres
/// => 0.000000316227).
pub fn quotient_avec_racine(
    p: &Fraction,
    delta: &Fraction,
    negatif: bool,
    q: &Fraction,
    chiffres: usize,
) -> Result<Decimale, ErreurEquation> {
    let scaled = quotient_scaled(p, delta, negatif, q, chiffres)?;
    if !scaled.is_zero() || quotient_exactement_nul(p, delta, negatif) {
        return Ok(Decimale { scaled, chiffres });
    }

    // valeur non nulle : l'échelle double jusqu'au premier chiffre non nul
    let mut essai = chiffres.max(1);
    let premier = loop {
        let s = quotient_scaled(p, delta, negatif, q, essai)?;
        if !s.is_zero() {
            break s;
        }
        essai *= 2;
    };
    let zeros = essai - premier.abs().to_str_radix(10).len();
    let etendus = zeros + chiffres.max(1);

    tracing::debug!(chiffres, etendus, "petite valeur : échelle étendue");
    Ok(Decimale {
        scaled: quotient_scaled(p, delta, negatif, q, etendus)?,
        chiffres: etendus,
    })
}

/// trunc((p + signe·√delta) / q · 10^chiffres)
fn quotient_scaled(
    p: &Fraction,
    delta: &Fraction,
    negatif: bool,
    q: &Fraction,
    chiffres: usize,
) -> Result<BigInt, ErreurEquation> {
    let echelle = chiffres + EXTRA;
    let s = rational_sqrt_scaled(delta, echelle);
    let s = if negatif { -s } else { s };

    let numerateur = p * &Fraction::entier(pow10(echelle)) + Fraction::entier(s);
    let v = numerateur.diviser(q)?;

    tracing::trace!(chiffres, "quotient avec racine: {v} (échelle 10^{echelle})");
    Ok(rational_scaled(&v, 0) / pow10(EXTRA))
}

/// p + signe·√delta == 0 exactement (√ d'un non-carré est irrationnel ; delta < 0 lu comme 0).
fn quotient_exactement_nul(p: &Fraction, delta: &Fraction, negatif: bool) -> bool {
    let racine = if delta.est_negatif() {
        Some(Fraction::zero())
    } else {
        delta.racine_exacte()
    };
    match racine {
        Some(s) if negatif => &s == p,
        Some(s) => s == -p,
        None => false,
    }
}
