// src/noyau/polynome.rs
//
// Polynôme canon : puissance -> coefficient exact non négligeable.
// Invariants :
// - aucune entrée avec |coeff| < ε (1e-10)
// - clés uniques, ordonnées (BTreeMap)
// - immuable une fois construit

use std::collections::BTreeMap;
use std::fmt;

use super::format::format_forme_reduite;
use super::fraction::Fraction;

/// Variable affichée quand l'équation n'en contient pas (ex: "5 = 5").
pub const VARIABLE_DEFAUT: char = 'X';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynome {
    coeffs: BTreeMap<u32, Fraction>,
    variable: char,
}

impl Polynome {
    /// Construit à partir de coefficients quelconques : somme par puissance,
    /// puis retrait des entrées négligeables.
    pub fn depuis_coefficients<I>(coeffs: I, variable: char) -> Polynome
    where
        I: IntoIterator<Item = (u32, Fraction)>,
    {
        let mut somme: BTreeMap<u32, Fraction> = BTreeMap::new();
        for (p, c) in coeffs {
            let acc = somme.entry(p).or_insert_with(Fraction::zero);
            *acc = &*acc + &c;
        }
        somme.retain(|_, c| !c.est_negligeable());
        Polynome {
            coeffs: somme,
            variable,
        }
    }

    /// Forme réduite : gauche − droite, puissance par puissance.
    pub fn difference(
        gauche: &BTreeMap<u32, Fraction>,
        droite: &BTreeMap<u32, Fraction>,
        variable: char,
    ) -> Polynome {
        let gauche = gauche.iter().map(|(p, c)| (*p, c.clone()));
        let droite = droite.iter().map(|(p, c)| (*p, -c));
        Polynome::depuis_coefficients(gauche.chain(droite), variable)
    }

    /// Plus grande puissance présente, 0 si polynôme nul.
    pub fn degre(&self) -> u32 {
        self.coeffs.keys().next_back().copied().unwrap_or(0)
    }

    /// Coefficient de X^p (0 si absent).
    pub fn coefficient(&self, p: u32) -> Fraction {
        self.coeffs.get(&p).cloned().unwrap_or_else(Fraction::zero)
    }

    pub fn coefficients(&self) -> &BTreeMap<u32, Fraction> {
        &self.coeffs
    }

    pub fn est_nul(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn variable(&self) -> char {
        self.variable
    }
}

impl fmt::Display for Polynome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_forme_reduite(self))
    }
}
