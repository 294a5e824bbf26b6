//! Noyau — résolution (pipeline réel)
//!
//! texte -> jetons -> termes (gauche / droite) -> polynôme canon (gauche − droite)
//!       -> solveur (degré, Δ) -> Solution + démarche -> lignes de sortie
//!
//! Remarque : aucune ligne n'est imprimée ici. La CLI et l'UI rendent le Rapport.

use super::demarche::{format_etapes, Etape};
use super::equation::normaliser;
use super::erreur::ErreurEquation;
use super::format::format_resultat;
use super::polynome::Polynome;
use super::reglages::Reglages;
use super::solveur::{resoudre, Resolution};

/// Tout ce qu'une résolution produit (données, pas affichage).
#[derive(Clone, Debug)]
pub struct Rapport {
    pub polynome: Polynome,
    pub forme_reduite: String,
    pub degre: u32,
    pub resolution: Resolution,
    /// Étapes du normaliseur puis du solveur, dans l'ordre.
    pub demarche: Vec<Etape>,
}

/// API publique : résout une équation polynomiale et retourne le Rapport.
///
/// Err = entrée invalide (famille syntaxique). Les cas dégénérés
/// (tous réels, aucune solution, degré > 2) sont des Solution, pas des Err.
pub fn resoudre_equation(texte: &str, reglages: &Reglages) -> Result<Rapport, ErreurEquation> {
    // 1) Normalisation (jetons, termes, gauche − droite)
    let n = normaliser(texte, reglages.variable_obligatoire)?;

    // 2) Forme réduite + degré
    let forme_reduite = n.polynome.to_string();
    let degre = n.polynome.degre();

    // 3) Solveur
    let resolution = resoudre(&n.polynome, reglages.chiffres)?;
    tracing::debug!(solution = ?resolution.solution, "résolu");

    // 4) Démarche complète
    let mut demarche = n.etapes;
    demarche.extend(resolution.etapes.iter().cloned());

    Ok(Rapport {
        polynome: n.polynome,
        forme_reduite,
        degre,
        resolution,
        demarche,
    })
}

impl Rapport {
    /// Lignes de sortie, dans l'ordre :
    /// forme réduite, degré, [démarche], phrase(s) de résultat.
    pub fn lignes(&self, reglages: &Reglages) -> Vec<String> {
        let mut out = vec![
            format!("Forme réduite : {}", self.forme_reduite),
            format!("Degré du polynôme : {}", self.degre),
        ];
        if reglages.afficher_etapes {
            out.extend(format_etapes(&self.demarche));
        }
        out.extend(self.resultat(reglages));
        out
    }

    /// Seulement la phrase de résultat (panneau “Solutions” de l'UI).
    pub fn resultat(&self, reglages: &Reglages) -> Vec<String> {
        format_resultat(&self.resolution, reglages)
    }
}
