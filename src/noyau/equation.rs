// src/noyau/equation.rs
//
// Normaliseur : texte -> polynôme canon (gauche − droite).
//
// Ordre des contrôles (le premier échec gagne) :
// entrée vide -> caractères (lexique) -> nombre de '=' -> variable unique
// -> membres non vides -> termes, de gauche à droite.

use std::collections::BTreeMap;

use super::demarche::Etape;
use super::erreur::ErreurEquation;
use super::fraction::Fraction;
use super::jetons::{format_tokens, termes, tokenize, variable_unique, Terme, Tok};
use super::polynome::{Polynome, VARIABLE_DEFAUT};

/// Résultat du normaliseur : le polynôme + la démarche qui l'a construit.
#[derive(Clone, Debug)]
pub struct EquationNormalisee {
    pub polynome: Polynome,
    pub etapes: Vec<Etape>,
}

/// Raccourci des tests : seulement le polynôme canon (variable facultative).
#[cfg(test)]
pub(crate) fn analyser(texte: &str) -> Result<Polynome, ErreurEquation> {
    normaliser(texte, false).map(|n| n.polynome)
}

pub fn normaliser(
    texte: &str,
    variable_obligatoire: bool,
) -> Result<EquationNormalisee, ErreurEquation> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurEquation::EntreeVide);
    }

    let jetons = tokenize(texte)?;
    tracing::debug!(jetons = %format_tokens(&jetons), "lexique");

    let egal: Vec<usize> = jetons
        .iter()
        .enumerate()
        .filter(|(_, j)| j.tok == Tok::Egal)
        .map(|(k, _)| k)
        .collect();
    let k = match egal.as_slice() {
        [] => return Err(ErreurEquation::EgalManquant),
        [k] => *k,
        plusieurs => return Err(ErreurEquation::PlusieursEgal(plusieurs.len())),
    };

    let variable = variable_unique(&jetons, variable_obligatoire)?.unwrap_or(VARIABLE_DEFAUT);

    let (jg, jd) = (&jetons[..k], &jetons[k + 1..]);
    if jg.is_empty() {
        return Err(ErreurEquation::MembreVide("gauche"));
    }
    if jd.is_empty() {
        return Err(ErreurEquation::MembreVide("droit"));
    }

    let gauche = termes(jg, texte)?;
    let droite = termes(jd, texte)?;

    let carte_g = regrouper(&gauche);
    let carte_d = regrouper(&droite);
    let polynome = Polynome::difference(&carte_g, &carte_d, variable);

    tracing::debug!(
        forme_reduite = %polynome,
        degre = polynome.degre(),
        "polynôme canon"
    );

    let mut etapes = vec![
        Etape::new("Jetons", format_tokens(&jetons)),
        Etape::new("Membre gauche", liste_termes(&gauche, variable)),
        Etape::new("Membre droit", liste_termes(&droite, variable)),
    ];
    etapes.extend(etapes_difference(&carte_g, &carte_d, variable));

    Ok(EquationNormalisee { polynome, etapes })
}

/// Somme des coefficients qui partagent une puissance (un seul membre).
fn regrouper(termes: &[Terme]) -> BTreeMap<u32, Fraction> {
    let mut carte: BTreeMap<u32, Fraction> = BTreeMap::new();
    for t in termes {
        let acc = carte.entry(t.puissance).or_insert_with(Fraction::zero);
        *acc = &*acc + &t.coefficient;
    }
    carte
}

fn liste_termes(termes: &[Terme], variable: char) -> String {
    let v: Vec<String> = termes
        .iter()
        .map(|t| format!("({}) * {variable}^{}", t.coefficient, t.puissance))
        .collect();
    v.join(", ")
}

/// Une étape par puissance (décroissante) : g − (d) = résultat.
fn etapes_difference(
    gauche: &BTreeMap<u32, Fraction>,
    droite: &BTreeMap<u32, Fraction>,
    variable: char,
) -> Vec<Etape> {
    let mut puissances: Vec<u32> = gauche.keys().chain(droite.keys()).copied().collect();
    puissances.sort_unstable_by(|a, b| b.cmp(a));
    puissances.dedup();

    puissances
        .into_iter()
        .map(|p| {
            let g = gauche.get(&p).cloned().unwrap_or_else(Fraction::zero);
            let d = droite.get(&p).cloned().unwrap_or_else(Fraction::zero);
            let r = &g - &d;
            Etape::new(
                format!("{variable}^{p}"),
                format!("{g} - ({d}) = {r}"),
            )
        })
        .collect()
}
