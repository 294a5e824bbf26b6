// src/noyau/jetons.rs
//
// Jetons + grammaire d'un terme.
//
// 1) tokenize : texte -> jetons positionnés (nombre brut, variable, + - * ^ =)
// 2) decouper_termes : un membre -> termes signés (coupure sur + / -,
//    sauf juste après '^' : le signe appartient alors à la puissance)
// 3) assembler : UN terme -> (coefficient exact, puissance), par motifs de tranche
//
// Les nombres restent du TEXTE jusqu'à l'assemblage : Fraction::depuis_litteral
// lit le littéral tel qu'écrit (9.3 = 93/10), sans passer par f64.

use std::collections::BTreeSet;

use super::erreur::ErreurEquation;
use super::fraction::Fraction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Littéral décimal brut : `\d+(\.\d+)?([eE][+-]?\d+)?` (validé à l'assemblage)
    Num(String),
    /// Lettre de variable, normalisée en majuscule
    Var(char),

    Plus,
    Minus,
    Star,
    Caret, // ^
    Egal,
}

/// Jeton + position (octets) dans le texte source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jeton {
    pub tok: Tok,
    pub debut: usize,
    pub fin: usize,
}

/// Monôme reconnu : coefficient exact, puissance >= 0, texte source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terme {
    pub coefficient: Fraction,
    pub puissance: u32,
    pub texte: String,
}

/* ------------------------ Lexique ------------------------ */

/// Tokenize une équation complète.
/// Supporte:
/// - littéraux décimaux (12, 9.3, 1.5e-3, 2E4)
/// - une lettre = une variable (x et X identiques)
/// - opérateurs + - * ^ et le signe =
/// - espaces quelconques
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurEquation> {
    let mut out = Vec::new();
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let fin_de = |k: usize| chars.get(k).map_or(s.len(), |&(pos, _)| pos);
    let mut i: usize = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '^' => Some(Tok::Caret),
            '=' => Some(Tok::Egal),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(Jeton {
                tok,
                debut: pos,
                fin: fin_de(i + 1),
            });
            i += 1;
            continue;
        }

        // Variable : une lettre ASCII (XY => deux variables, pas un identifiant)
        if c.is_ascii_alphabetic() {
            out.push(Jeton {
                tok: Tok::Var(c.to_ascii_uppercase()),
                debut: pos,
                fin: fin_de(i + 1),
            });
            i += 1;
            continue;
        }

        // Littéral : chiffres [. chiffres] [e[+-]chiffres]
        // ".5" et "4." sont lus ici puis refusés à l'assemblage (terme invalide).
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let chiffre = |k: usize| chars.get(k).is_some_and(|&(_, ch)| ch.is_ascii_digit());

            while chiffre(i) {
                i += 1;
            }
            if chars.get(i).is_some_and(|&(_, ch)| ch == '.') {
                i += 1;
                while chiffre(i) {
                    i += 1;
                }
            }
            // 'e' n'est un exposant que s'il est suivi de chiffres (éventuellement signés)
            if chars.get(i).is_some_and(|&(_, ch)| ch == 'e' || ch == 'E') {
                let signe = chars.get(i + 1).is_some_and(|&(_, ch)| ch == '+' || ch == '-');
                let k = if signe { i + 2 } else { i + 1 };
                if i > start && chiffre(k) {
                    i = k;
                    while chiffre(i) {
                        i += 1;
                    }
                }
            }

            let fin = fin_de(i);
            out.push(Jeton {
                tok: Tok::Num(s[pos..fin].to_string()),
                debut: pos,
                fin,
            });
            continue;
        }

        return Err(ErreurEquation::CaractereInvalide {
            caractere: c,
            position: i + 1,
        });
    }

    Ok(out)
}

/// Variable unique de l'équation (insensible à la casse).
/// - plusieurs lettres distinctes => PlusieursVariables
/// - aucune lettre => AucuneVariable si `obligatoire`, sinon None
pub fn variable_unique(
    jetons: &[Jeton],
    obligatoire: bool,
) -> Result<Option<char>, ErreurEquation> {
    let vars: BTreeSet<char> = jetons
        .iter()
        .filter_map(|j| match j.tok {
            Tok::Var(v) => Some(v),
            _ => None,
        })
        .collect();

    match vars.len() {
        0 if obligatoire => Err(ErreurEquation::AucuneVariable),
        0 => Ok(None),
        1 => Ok(vars.into_iter().next()),
        _ => {
            let liste: Vec<String> = vars.iter().map(char::to_string).collect();
            Err(ErreurEquation::PlusieursVariables(liste.join(", ")))
        }
    }
}

/* ------------------------ Termes ------------------------ */

/// Texte source couvert par une suite de jetons.
fn texte_de<'a>(source: &'a str, jetons: &[Jeton]) -> &'a str {
    match (jetons.first(), jetons.last()) {
        (Some(a), Some(b)) => source[a.debut..b.fin].trim(),
        _ => "",
    }
}

/// Découpe un membre en termes signés.
/// - signe implicite '+' pour un terme sans signe
/// - suite de signes repliée ("+ -3" => -3, "--2" => +2)
/// - un signe juste après '^' reste dans le terme (puissance signée)
pub fn decouper_termes(jetons: &[Jeton]) -> Vec<(bool, &[Jeton], &[Jeton])> {
    let est_signe = |t: &Tok| matches!(t, Tok::Plus | Tok::Minus);

    let mut out = Vec::new();
    let mut i = 0;

    while i < jetons.len() {
        let debut_signes = i;
        let mut negatif = false;
        while i < jetons.len() && est_signe(&jetons[i].tok) {
            if jetons[i].tok == Tok::Minus {
                negatif = !negatif;
            }
            i += 1;
        }

        let start = i;
        while i < jetons.len() {
            let coupe = est_signe(&jetons[i].tok)
                && i > start
                && jetons[i - 1].tok != Tok::Caret;
            if coupe {
                break;
            }
            i += 1;
        }

        out.push((negatif, &jetons[debut_signes..start], &jetons[start..i]));
    }

    out
}

enum Puissance<'a> {
    Fixe(u32),
    Ecrite(&'a str),
}

/// Assemble UN terme (sans ses signes) : formes exclusives, '*' facultatif.
/// - c
/// - X
/// - X^n
/// - cX, c*X
/// - cX^n, c*X^n
pub fn assembler(negatif: bool, jetons: &[Jeton], texte: &str) -> Result<Terme, ErreurEquation> {
    use Tok::*;

    let invalide = || ErreurEquation::TermeInvalide(texte.to_string());
    let toks: Vec<&Tok> = jetons.iter().map(|j| &j.tok).collect();

    let (coeff, puissance): (Option<&str>, Puissance) = match toks.as_slice() {
        [Num(c)] => (Some(c.as_str()), Puissance::Fixe(0)),
        [Var(_)] => (None, Puissance::Fixe(1)),
        [Var(_), Caret, Num(p)] => (None, Puissance::Ecrite(p.as_str())),
        [Num(c), Var(_)] | [Num(c), Star, Var(_)] => (Some(c.as_str()), Puissance::Fixe(1)),
        [Num(c), Var(_), Caret, Num(p)] | [Num(c), Star, Var(_), Caret, Num(p)] => {
            (Some(c.as_str()), Puissance::Ecrite(p.as_str()))
        }
        [.., Var(_), Caret, Minus, Num(_)] => {
            return Err(ErreurEquation::PuissanceNegative(texte.to_string()))
        }
        _ => return Err(invalide()),
    };

    let puissance = match puissance {
        Puissance::Fixe(n) => n,
        Puissance::Ecrite(p) => {
            if !p.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalide());
            }
            p.parse::<u32>().map_err(|_| invalide())?
        }
    };

    let coefficient = match coeff {
        None => Fraction::un(),
        Some(c) => Fraction::depuis_litteral(c).map_err(|e| match e {
            ErreurEquation::LitteralInvalide(_) => invalide(),
            autre => autre,
        })?,
    };
    let coefficient = if negatif { -coefficient } else { coefficient };

    Ok(Terme {
        coefficient,
        puissance,
        texte: texte.to_string(),
    })
}

/// Tous les termes d'un membre (jetons sans '=').
pub fn termes(jetons: &[Jeton], source: &str) -> Result<Vec<Terme>, ErreurEquation> {
    let mut out = Vec::new();
    for (negatif, signes, corps) in decouper_termes(jetons) {
        if corps.is_empty() {
            // signe pendant : "5 +", "3 - = 1"
            return Err(ErreurEquation::TermeInvalide(texte_de(source, signes).to_string()));
        }
        let texte = match signes.first() {
            Some(s) => &source[s.debut..corps[corps.len() - 1].fin],
            None => texte_de(source, corps),
        };
        let terme = assembler(negatif, corps, texte.trim())?;
        tracing::debug!(
            terme = %terme.texte,
            coefficient = %terme.coefficient,
            puissance = terme.puissance,
            "terme reconnu"
        );
        out.push(terme);
    }
    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match &t.tok {
            Tok::Num(n) => n.clone(),
            Tok::Var(v) => v.to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Egal => "=".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
