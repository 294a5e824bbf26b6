//! src/app/etat.rs
//!
//! État UI (sans vue, sans résolution).
//!
//! Rôle : contenir l’état du solveur (entrée, forme réduite, degré, solutions, erreur,
//! démarche, réglages) et offrir des opérations simples (C/CLR/AC, DEL, insertion)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune résolution ici (pas de parsing) : vue.rs appelle le noyau puis dépose le résultat.
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur la précision (via Reglages::set_chiffres).

use solveur_qpur::noyau::reglages::{Reglages, CHIFFRES_DEFAUT};

#[derive(Clone, Debug)]
pub struct AppEquation {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub forme_reduite: String,  // "4 * X^0 + 4 * X^1 - 9.3 * X^2 = 0"
    pub degre: Option<u32>,     // None tant qu’aucune équation n’est résolue
    pub solutions: Vec<String>, // phrase(s) de résultat
    pub erreur: String,         // message d’erreur (si l’équation est refusée)

    // --- démarche (panneau d’explication) : une ligne numérotée par étape ---
    pub demarche: Vec<String>,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppEquation {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

/// Nature d’un texte inséré par un bouton (gère les espaces automatiques).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertKind {
    Digit,
    Var,
    Op,
    Egal,
}

impl AppEquation {
    /// État initial avec des réglages donnés (ex: ceux de la ligne de commande).
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            entree: String::new(),
            forme_reduite: String::new(),
            degre: None,
            solutions: Vec::new(),
            erreur: String::new(),
            demarche: Vec::new(),
            reglages,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + précision par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.reglages.set_chiffres(CHIFFRES_DEFAUT);
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.forme_reduite.clear();
        self.degre = None;
        self.solutions.clear();
        self.erreur.clear();
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE forme réduite + degré (dernier résultat) pour ne pas “effacer l’écran”.
    /// - On coupe solutions + démarche (elles ne correspondent plus à l’entrée).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.solutions.clear();
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(
        &mut self,
        forme_reduite: impl Into<String>,
        degre: u32,
        solutions: Vec<String>,
        demarche: Vec<String>,
    ) {
        self.erreur.clear();
        self.forme_reduite = forme_reduite.into();
        self.degre = Some(degre);
        self.solutions = solutions;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : précision bornée par Reglages.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.reglages.set_chiffres(chiffres);
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (et les espaces qui l’entourent).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.focus_entree = true;
    }

    /// Insertion depuis un bouton, avec espaces automatiques autour des opérateurs.
    pub fn inserer(&mut self, texte: &str, kind: InsertKind) {
        if texte.is_empty() {
            return;
        }

        match kind {
            InsertKind::Op | InsertKind::Egal => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(texte);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto ("3X" reste collé)
                self.entree.push_str(texte);
            }
            InsertKind::Var => {
                // "3" puis "X" => "3X" (coefficient implicite), rien à ajouter
                self.entree.push_str(texte);
            }
        }

        self.focus_entree = true;
    }
}
