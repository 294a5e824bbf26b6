//! Noyau exact Q-pur : équations polynomiales à une variable
//!
//! Organisation interne :
//! - fraction.rs  : fraction exacte (BigRational), littéraux décimaux exacts
//! - jetons.rs    : tokenisation + grammaire d'un terme
//! - equation.rs  : normaliseur (gauche − droite -> polynôme canon)
//! - polynome.rs  : polynôme canon (puissance -> coefficient)
//! - solveur.rs   : automate par degré (0, 1, 2, > 2) + discriminant
//! - lecture.rs   : ΣLocal (décimal tronqué) + √ par Newton entier
//! - format.rs    : forme réduite, complexes, phrase de résultat
//! - demarche.rs  : étapes (données)
//! - reglages.rs  : précision + options d'affichage
//! - erreur.rs    : ErreurEquation
//! - eval.rs      : pipeline complet

pub mod demarche;
pub mod equation;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod fraction;
pub mod jetons;
pub mod lecture;
pub mod polynome;
pub mod reglages;
pub mod solveur;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurEquation;
pub use eval::{resoudre_equation, Rapport};
pub use reglages::Reglages;
