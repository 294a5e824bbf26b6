// src/noyau/fraction.rs
//
// Fraction exacte (Q-pur) : toujours réduite, dénominateur > 0.
// - construite depuis un entier ou depuis le TEXTE d'un littéral décimal
//   (jamais depuis un f64 : 9.3 vaut 93/10, pas l'approximation binaire)
// - division par zéro => Err(DivisionParZero), jamais de panique
// - ordre exact par produits croisés

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::erreur::ErreurEquation;
use super::lecture::scaled_to_decimal;

/// Garde-fou : |exposant| max d'un littéral (1e4096 reste raisonnable en BigInt).
pub const EXPOSANT_LITTERAL_MAX: u32 = 4096;

/// ε = 1e-10 : en dessous, un coefficient est considéré nul.
const EPSILON_CHIFFRES: u32 = 10;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction(BigRational);

impl Fraction {
    /// n/d réduit. d == 0 => DivisionParZero.
    pub fn nouvelle(
        numerateur: impl Into<BigInt>,
        denominateur: impl Into<BigInt>,
    ) -> Result<Fraction, ErreurEquation> {
        let d = denominateur.into();
        if d.is_zero() {
            return Err(ErreurEquation::DivisionParZero);
        }
        // BigRational::new : pgcd + signe porté par le numérateur
        Ok(Fraction(BigRational::new(numerateur.into(), d)))
    }

    pub fn entier(n: impl Into<BigInt>) -> Fraction {
        Fraction(BigRational::from_integer(n.into()))
    }

    pub fn zero() -> Fraction {
        Fraction(BigRational::zero())
    }

    pub fn un() -> Fraction {
        Fraction(BigRational::one())
    }

    /// ε sous forme exacte (1/10^10).
    pub fn epsilon() -> Fraction {
        Fraction(BigRational::new(BigInt::one(), pow10(EPSILON_CHIFFRES)))
    }

    /// Littéral `[+-]?\d+(\.\d+)?([eE][+-]?\d+)?` -> fraction EXACTE.
    ///
    /// Les chiffres après le point donnent une puissance de 10 au dénominateur ;
    /// l'exposant décale ensuite numérateur (e+) ou dénominateur (e-).
    pub fn depuis_litteral(texte: &str) -> Result<Fraction, ErreurEquation> {
        let invalide = || ErreurEquation::LitteralInvalide(texte.to_string());
        let hors_bornes = || ErreurEquation::LitteralHorsBornes(texte.to_string());

        let (negatif, corps) = separer_signe(texte.trim());

        let (mantisse, exposant) = match corps.find(['e', 'E']) {
            Some(i) => (&corps[..i], Some(&corps[i + 1..])),
            None => (corps, None),
        };

        let (partie_entiere, partie_frac) = match mantisse.split_once('.') {
            Some((e, f)) => {
                if f.is_empty() || !tous_chiffres(f) {
                    return Err(invalide());
                }
                (e, f)
            }
            None => (mantisse, ""),
        };
        if partie_entiere.is_empty() || !tous_chiffres(partie_entiere) {
            return Err(invalide());
        }

        let exp: i64 = match exposant {
            None => 0,
            Some(t) => {
                let (exp_negatif, chiffres) = separer_signe(t);
                if chiffres.is_empty() || !tous_chiffres(chiffres) {
                    return Err(invalide());
                }
                // u32::parse échoue aussi sur les exposants gigantesques
                let v: u32 = chiffres.parse().map_err(|_| hors_bornes())?;
                if v > EXPOSANT_LITTERAL_MAX {
                    return Err(hors_bornes());
                }
                if exp_negatif {
                    -i64::from(v)
                } else {
                    i64::from(v)
                }
            }
        };

        let tous = format!("{partie_entiere}{partie_frac}");
        let mut num = BigInt::parse_bytes(tous.as_bytes(), 10).ok_or_else(invalide)?;
        if negatif {
            num = -num;
        }

        let decalage = exp - partie_frac.len() as i64;
        let magnitude = u32::try_from(decalage.unsigned_abs()).map_err(|_| hors_bornes())?;
        let r = if decalage >= 0 {
            BigRational::from_integer(num * pow10(magnitude))
        } else {
            BigRational::new(num, pow10(magnitude))
        };
        Ok(Fraction(r))
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn est_nul(&self) -> bool {
        self.0.is_zero()
    }

    pub fn est_un(&self) -> bool {
        self.0.is_one()
    }

    pub fn est_negatif(&self) -> bool {
        self.0.is_negative()
    }

    pub fn est_entier(&self) -> bool {
        self.0.is_integer()
    }

    /// |x| < ε
    pub fn est_negligeable(&self) -> bool {
        self.abs() < Fraction::epsilon()
    }

    pub fn abs(&self) -> Fraction {
        Fraction(self.0.abs())
    }

    /// Division contrôlée (jamais de panique sur 0).
    pub fn diviser(&self, autre: &Fraction) -> Result<Fraction, ErreurEquation> {
        if autre.est_nul() {
            return Err(ErreurEquation::DivisionParZero);
        }
        Ok(Fraction(&self.0 / &autre.0))
    }

    /// √x exacte si numérateur ET dénominateur sont des carrés parfaits.
    pub fn racine_exacte(&self) -> Option<Fraction> {
        if self.est_negatif() {
            return None;
        }
        let sn = racine_entiere_exacte(self.numer())?;
        let sd = racine_entiere_exacte(self.denom())?;
        Some(Fraction(BigRational::new(sn, sd)))
    }

    /// Valeur approchée (comparaisons des tests).
    #[cfg(test)]
    pub(crate) fn vers_f64(&self) -> f64 {
        use num_traits::ToPrimitive;
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    /// Écriture décimale EXACTE si le dénominateur divise une puissance de 10
    /// (toujours le cas pour un coefficient issu d'un littéral).
    pub fn vers_decimal_fini(&self) -> Option<String> {
        let mut d = self.denom().clone();
        let deux = BigInt::from(2);
        let cinq = BigInt::from(5);
        let (mut a, mut b) = (0usize, 0usize);

        while (&d % &deux).is_zero() {
            d /= &deux;
            a += 1;
        }
        while (&d % &cinq).is_zero() {
            d /= &cinq;
            b += 1;
        }
        if !d.is_one() {
            return None;
        }

        let k = a.max(b);
        let scaled = self.numer() * pow10(k as u32) / self.denom();
        Some(scaled_to_decimal(scaled, k))
    }

    pub(crate) fn as_rational(&self) -> &BigRational {
        &self.0
    }
}

/* ------------------------ Ordre exact (produits croisés) ------------------------ */

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // dénominateurs > 0 : le sens de l'inégalité est conservé
        (self.numer() * other.denom()).cmp(&(other.numer() * self.denom()))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ------------------------ Arithmétique ------------------------ */

macro_rules! operation_exacte {
    ($Trait:ident, $methode:ident, $op:tt) => {
        impl $Trait for Fraction {
            type Output = Fraction;
            fn $methode(self, rhs: Fraction) -> Fraction {
                Fraction(self.0 $op rhs.0)
            }
        }

        impl<'a> $Trait<&'a Fraction> for &'a Fraction {
            type Output = Fraction;
            fn $methode(self, rhs: &'a Fraction) -> Fraction {
                Fraction(&self.0 $op &rhs.0)
            }
        }
    };
}

operation_exacte!(Add, add, +);
operation_exacte!(Sub, sub, -);
operation_exacte!(Mul, mul, *);

impl Neg for Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        Fraction(-self.0)
    }
}

impl Neg for &Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        Fraction(-&self.0)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.numer();
        let d = self.denom();
        if d.is_one() {
            write!(f, "{n}")
        } else {
            write!(f, "{n}/{d}")
        }
    }
}

/* ------------------------ Outils entiers ------------------------ */

fn separer_signe(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

fn tous_chiffres(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// √x exacte pour un entier x >= 0, sinon None.
pub(crate) fn racine_entiere_exacte(x: &BigInt) -> Option<BigInt> {
    if x.is_negative() {
        return None;
    }
    let s = racine_entiere(x);
    if &s * &s == *x {
        Some(s)
    } else {
        None
    }
}

/// floor(√x) par Newton entier.
pub(crate) fn racine_entiere(x: &BigInt) -> BigInt {
    if x.is_zero() || x.is_negative() {
        return BigInt::zero();
    }

    let mut y = depart_racine(x);
    loop {
        let y_next = (&y + (x / &y)) >> 1;
        if y_next >= y {
            let mut z = y;
            while (&z + 1u32) * (&z + 1u32) <= *x {
                z += 1u32;
            }
            while &z * &z > *x {
                z -= 1u32;
            }
            return z;
        }
        y = y_next;
    }
}

/// Point de départ >= √x (puissance de 2).
fn depart_racine(x: &BigInt) -> BigInt {
    let half = x.bits().div_ceil(2);
    BigInt::one() << half
}
