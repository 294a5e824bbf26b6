//! Solveur Q-pur : équations polynomiales à une variable, en rationnels exacts.
//!
//! Le noyau (src/noyau) est partagé par la ligne de commande et l'interface egui.

pub mod noyau;

pub use noyau::{resoudre_equation, ErreurEquation, Rapport, Reglages};
