// src/noyau/demarche.rs
//
// Démarche = données, pas affichage.
// Le normaliseur et le solveur empilent des étapes ; la CLI et l'UI les rendent.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Etape {
    pub titre: String,
    pub detail: String,
}

impl Etape {
    pub fn new(titre: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            titre: titre.into(),
            detail: detail.into(),
        }
    }
}

/// Rendu texte : une ligne numérotée par étape.
pub fn format_etapes(etapes: &[Etape]) -> Vec<String> {
    etapes
        .iter()
        .enumerate()
        .map(|(k, e)| format!("{}. {} : {}", k + 1, e.titre, e.detail))
        .collect()
}
