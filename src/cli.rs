// src/cli.rs
//
// Solveur Q-pur — ligne de commande (natif seulement)
// ---------------------------------------------------
// Rôle:
// - Lire les options (clap) avec repli sur les variables d'environnement
// - Construire les Reglages du noyau
// - Imprimer le Rapport (stdout) ou l'erreur (stderr), rendre le code de sortie
//
// Aucune logique de résolution ici : tout passe par noyau::resoudre_equation.

use std::io::{self, Write};

use clap::Parser;

use solveur_qpur::noyau::reglages::{Reglages, CHIFFRES_DEFAUT};
use solveur_qpur::noyau::resoudre_equation;

/// Code de sortie : équation lue (quel que soit le résultat mathématique).
pub const SORTIE_OK: u8 = 0;
/// Code de sortie : entrée invalide.
pub const SORTIE_ERREUR: u8 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "solveur_qpur",
    version = env!("CARGO_PKG_VERSION"),
    about = "Solveur exact d'équations polynomiales à une variable (degré ≤ 2)",
    long_about = r#"
Solveur Q-pur : lit une équation polynomiale à une variable, affiche sa forme
réduite, son degré et ses solutions.

Les coefficients sont lus EXACTEMENT (9.3 = 93/10). Les solutions rationnelles
sortent en fractions ; les racines irrationnelles et les parties imaginaires
non exactes sortent en décimales tronquées.

Exemples:
  solveur_qpur "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0"
  solveur_qpur "5 + 4X - 9.3X^2 = 1"
  solveur_qpur -s "X^2 - 4 = 0"           # avec la démarche
  solveur_qpur -d "3X = 1"                # 1/3 (≈ 0.333333)
  solveur_qpur -c 12 "X^2 = 2"            # 12 chiffres
  solveur_qpur                            # interface graphique
"#,
    after_help = r#"
Variables d'environnement:
  SOLVEUR_ETAPES=1                 Afficher la démarche
  SOLVEUR_DECIMALES=1              Ajouter les décimales aux fractions
  SOLVEUR_CHIFFRES=<n>             Chiffres des valeurs approchées (défaut: 6, max: 200)
  SOLVEUR_VARIABLE_OBLIGATOIRE=1   Refuser une équation sans variable
  SOLVEUR_LOG=debug                Niveau de journalisation (si RUST_LOG absent)
"#
)]
pub struct Cli {
    /// Équation à résoudre (sans équation : interface graphique)
    #[arg(allow_hyphen_values = true)]
    pub equation: Option<String>,

    /// Afficher la démarche (étapes) avant le résultat
    #[arg(short = 's', long, env = "SOLVEUR_ETAPES", value_parser = parse_bool_env)]
    pub etapes: bool,

    /// Ajouter une valeur décimale derrière chaque fraction
    #[arg(short, long, env = "SOLVEUR_DECIMALES", value_parser = parse_bool_env)]
    pub decimales: bool,

    /// Chiffres après la virgule des valeurs approchées
    #[arg(short, long, env = "SOLVEUR_CHIFFRES", default_value_t = CHIFFRES_DEFAUT)]
    pub chiffres: usize,

    /// Refuser une équation sans variable (ex: "5 = 5")
    #[arg(long, env = "SOLVEUR_VARIABLE_OBLIGATOIRE", value_parser = parse_bool_env)]
    pub variable_obligatoire: bool,

    /// Journalisation détaillée (debug) sur stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn reglages(&self) -> Reglages {
        let mut r = Reglages {
            afficher_etapes: self.etapes,
            afficher_decimales: self.decimales,
            variable_obligatoire: self.variable_obligatoire,
            ..Reglages::default()
        };
        r.set_chiffres(self.chiffres);
        r
    }
}

fn parse_bool_env(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "oui" => Ok(true),
        "0" | "false" | "no" | "off" | "non" => Ok(false),
        "" => Ok(false),
        _ => Err(format!(
            "booléen invalide '{s}'. Attendu: 1/0, true/false, oui/non, on/off"
        )),
    }
}

/// Résout `equation` et imprime le résultat.
///
/// - succès : lignes du Rapport sur `out`, code SORTIE_OK
/// - erreur : `Erreur : <message>` sur `err`, code SORTIE_ERREUR
pub fn executer(
    equation: &str,
    reglages: &Reglages,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<u8> {
    match resoudre_equation(equation, reglages) {
        Ok(rapport) => {
            for ligne in rapport.lignes(reglages) {
                writeln!(out, "{ligne}")?;
            }
            Ok(SORTIE_OK)
        }
        Err(e) => {
            tracing::debug!(erreur = ?e, "équation refusée");
            writeln!(err, "Erreur : {e}")?;
            Ok(SORTIE_ERREUR)
        }
    }
}
