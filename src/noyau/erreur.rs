// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - Famille syntaxique : tout ce qui empêche de construire le polynôme canon.
// - DivisionParZero : seulement Fraction (nouvelle / diviser).
//
// Les cas mathématiques dégénérés (tous réels, aucune solution, degré > 2)
// ne sont PAS des erreurs : voir solveur::Solution.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurEquation {
    #[error("entrée vide")]
    EntreeVide,

    #[error("signe '=' manquant")]
    EgalManquant,

    #[error("l'équation doit contenir exactement un '=' (trouvé {0})")]
    PlusieursEgal(usize),

    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInvalide { caractere: char, position: usize },

    #[error("une seule variable autorisée, trouvé: {0}")]
    PlusieursVariables(String),

    #[error("aucune variable dans l'équation")]
    AucuneVariable,

    #[error("terme invalide: '{0}'")]
    TermeInvalide(String),

    #[error("puissance négative refusée: '{0}'")]
    PuissanceNegative(String),

    #[error("membre {0} vide")]
    MembreVide(&'static str),

    #[error("littéral décimal invalide: '{0}'")]
    LitteralInvalide(String),

    #[error("littéral hors bornes (exposant trop grand): '{0}'")]
    LitteralHorsBornes(String),

    #[error("division par zéro")]
    DivisionParZero,
}
