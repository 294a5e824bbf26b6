// src/noyau/reglages.rs
//
// Réglages du noyau (partagés CLI + UI).
// Défense en profondeur : bornes sur les chiffres des lectures approchées.

/// Chiffres par défaut des valeurs approchées (√ non carrée, parties imaginaires).
pub const CHIFFRES_DEFAUT: usize = 6;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// Chiffres après la virgule des valeurs approchées (tronquées).
    pub chiffres: usize,
    /// Démarche (étapes) affichée avant le résultat.
    pub afficher_etapes: bool,
    /// Ajoute “(≈ …)” derrière les fractions exactes non entières.
    pub afficher_decimales: bool,
    /// Refuse une équation sans variable (sinon “5 = 5” est de degré 0).
    pub variable_obligatoire: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            chiffres: CHIFFRES_DEFAUT,
            afficher_etapes: false,
            afficher_decimales: false,
            variable_obligatoire: false,
        }
    }
}

impl Reglages {
    /// Fixe la précision, bornée à DIGITS_MAX.
    pub fn avec_chiffres(mut self, chiffres: usize) -> Self {
        self.set_chiffres(chiffres);
        self
    }

    pub fn set_chiffres(&mut self, chiffres: usize) {
        if chiffres > DIGITS_MAX {
            tracing::warn!(demande = chiffres, max = DIGITS_MAX, "précision bornée");
        }
        self.chiffres = chiffres.min(DIGITS_MAX);
    }
}
