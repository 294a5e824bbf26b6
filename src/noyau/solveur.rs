// src/noyau/solveur.rs
//
// Solveur : automate fermé sur le degré.
//
//   Degre0 { c }        -> TousLesReels | AucuneSolution
//   Degre1 { a, b }     -> -b/a exacte        (a ≈ 0 : retombe sur Degre0)
//   Degre2 { a, b, c }  -> selon Δ = b² - 4ac (a ≈ 0 : retombe sur Degre1)
//   NonSupporte(n)      -> résultat normal, aucun calcul de racine
//
// Tout est exact (Fraction) tant que possible :
// - Δ carré parfait => racines exactes
// - sinon √Δ par Newton entier (lecture.rs) => décimales tronquées
//
// Le solveur ne fait AUCUN affichage : il rend une Solution + des étapes.

use super::demarche::Etape;
use super::erreur::ErreurEquation;
use super::format::format_coefficient;
use super::fraction::Fraction;
use super::lecture::{quotient_avec_racine, racine_approchee, Decimale};
use super::polynome::Polynome;

/// Valeur d'une racine (ou d'une partie de complexe) : exacte ou approchée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Valeur {
    Exacte(Fraction),
    Approchee(Decimale),
}

impl Valeur {
    pub fn oppose(&self) -> Valeur {
        match self {
            Valeur::Exacte(f) => Valeur::Exacte(-f),
            Valeur::Approchee(d) => Valeur::Approchee(d.oppose()),
        }
    }

    pub fn est_nulle(&self) -> bool {
        match self {
            Valeur::Exacte(f) => f.est_nul(),
            Valeur::Approchee(d) => d.est_nulle(),
        }
    }

}

#[cfg(test)]
impl Valeur {
    pub(crate) fn est_exacte(&self) -> bool {
        matches!(self, Valeur::Exacte(_))
    }

    pub(crate) fn vers_f64(&self) -> f64 {
        match self {
            Valeur::Exacte(f) => f.vers_f64(),
            Valeur::Approchee(d) => d.vers_f64(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Racine {
    Reelle(Valeur),
    /// re + im·i (im signée)
    Complexe { re: Valeur, im: Valeur },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    TousLesReels,
    AucuneSolution,
    NonSupporte(u32),
    Racines(Vec<Racine>),
}

/// Solution + discriminant (degré 2 seulement) + démarche.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub solution: Solution,
    pub discriminant: Option<Fraction>,
    pub etapes: Vec<Etape>,
}

/// Les cas du solveur (un handler chacun).
#[derive(Clone, Debug, PartialEq, Eq)]
enum Cas {
    Degre0 { c: Fraction },
    Degre1 { a: Fraction, b: Fraction },
    Degre2 { a: Fraction, b: Fraction, c: Fraction },
    NonSupporte(u32),
}

impl Cas {
    fn depuis(p: &Polynome) -> Cas {
        match p.degre() {
            0 => Cas::Degre0 {
                c: p.coefficient(0),
            },
            1 => Cas::Degre1 {
                a: p.coefficient(1),
                b: p.coefficient(0),
            },
            2 => Cas::Degre2 {
                a: p.coefficient(2),
                b: p.coefficient(1),
                c: p.coefficient(0),
            },
            n => Cas::NonSupporte(n),
        }
    }
}

/// Point d'entrée : résout le polynôme canon.
///
/// `chiffres` : précision des valeurs approchées.
/// Une Err ici (DivisionParZero) signale un bug de l'automate, jamais une entrée.
pub fn resoudre(p: &Polynome, chiffres: usize) -> Result<Resolution, ErreurEquation> {
    let mut r = Resolveur {
        variable: p.variable(),
        chiffres,
        etapes: Vec::new(),
        discriminant: None,
    };

    let cas = Cas::depuis(p);
    tracing::debug!(?cas, "cas du solveur");

    let solution = match cas {
        Cas::Degre0 { c } => r.degre0(&c),
        Cas::Degre1 { a, b } => r.degre1(&a, &b)?,
        Cas::Degre2 { a, b, c } => r.degre2(&a, &b, &c)?,
        Cas::NonSupporte(n) => r.non_supporte(n),
    };

    Ok(Resolution {
        solution,
        discriminant: r.discriminant,
        etapes: r.etapes,
    })
}

struct Resolveur {
    variable: char,
    chiffres: usize,
    etapes: Vec<Etape>,
    discriminant: Option<Fraction>,
}

impl Resolveur {
    fn etape(&mut self, titre: &str, detail: String) {
        self.etapes.push(Etape::new(titre, detail));
    }

    fn degre0(&mut self, c: &Fraction) -> Solution {
        self.etape(
            "Degré 0",
            format!("équation constante : {} = 0", format_coefficient(c)),
        );
        if c.est_negligeable() {
            Solution::TousLesReels
        } else {
            Solution::AucuneSolution
        }
    }

    fn degre1(&mut self, a: &Fraction, b: &Fraction) -> Result<Solution, ErreurEquation> {
        if a.est_negligeable() {
            return Ok(self.degre0(b));
        }
        let v = self.variable;
        self.etape(
            "Degré 1",
            format!(
                "a·{v} + b = 0 avec a = {}, b = {}",
                format_coefficient(a),
                format_coefficient(b)
            ),
        );

        let x = (-b).diviser(a)?;
        self.etape("Solution", format!("{v} = -b / a = {x}"));
        Ok(Solution::Racines(vec![Racine::Reelle(Valeur::Exacte(x))]))
    }

    fn degre2(
        &mut self,
        a: &Fraction,
        b: &Fraction,
        c: &Fraction,
    ) -> Result<Solution, ErreurEquation> {
        if a.est_negligeable() {
            return self.degre1(b, c);
        }
        let v = self.variable;
        self.etape(
            "Degré 2",
            format!(
                "a·{v}² + b·{v} + c = 0 avec a = {}, b = {}, c = {}",
                format_coefficient(a),
                format_coefficient(b),
                format_coefficient(c)
            ),
        );

        let quatre = Fraction::entier(4);
        let delta = &(b * b) - &(&(&quatre * a) * c);
        self.etape(
            "Discriminant",
            format!(
                "Δ = b² - 4ac = ({})² - 4·({})·({}) = {delta}",
                format_coefficient(b),
                format_coefficient(a),
                format_coefficient(c)
            ),
        );
        self.discriminant = Some(delta.clone());

        let deux_a = &Fraction::entier(2) * a;
        let moins_b = -b;
        let epsilon = Fraction::epsilon();

        if delta > epsilon {
            self.deux_racines_reelles(&moins_b, &delta, &deux_a)
        } else if delta >= -&epsilon {
            self.etape("Δ nul", "une racine double".to_string());
            let x = moins_b.diviser(&deux_a)?;
            self.etape("Solution", format!("{v} = -b / 2a = {x}"));
            Ok(Solution::Racines(vec![Racine::Reelle(Valeur::Exacte(x))]))
        } else {
            self.racines_complexes(&moins_b, &delta, &deux_a)
        }
    }

    /// Δ > 0 : (-b ± √Δ) / 2a, racine « + » d'abord.
    fn deux_racines_reelles(
        &mut self,
        moins_b: &Fraction,
        delta: &Fraction,
        deux_a: &Fraction,
    ) -> Result<Solution, ErreurEquation> {
        let v = self.variable;

        let (x1, x2) = match delta.racine_exacte() {
            Some(s) => {
                self.etape(
                    "√Δ",
                    format!("√{delta} = {s} (carré parfait : solutions exactes)"),
                );
                let x1 = (moins_b + &s).diviser(deux_a)?;
                let x2 = (moins_b - &s).diviser(deux_a)?;
                (Valeur::Exacte(x1), Valeur::Exacte(x2))
            }
            None => {
                let approx = racine_approchee(delta, self.chiffres);
                self.etape(
                    "√Δ",
                    format!("√{delta} ≈ {approx} (pas un carré parfait : solutions approchées)"),
                );
                let x1 = quotient_avec_racine(moins_b, delta, false, deux_a, self.chiffres)?;
                let x2 = quotient_avec_racine(moins_b, delta, true, deux_a, self.chiffres)?;
                (Valeur::Approchee(x1), Valeur::Approchee(x2))
            }
        };

        self.etape("Solution 1", format!("{v}₁ = (-b + √Δ) / 2a"));
        self.etape("Solution 2", format!("{v}₂ = (-b - √Δ) / 2a"));
        Ok(Solution::Racines(vec![Racine::Reelle(x1), Racine::Reelle(x2)]))
    }

    /// Δ < 0 : re = -b/2a (exacte), im = √|Δ| / |2a| (exacte si carré parfait).
    fn racines_complexes(
        &mut self,
        moins_b: &Fraction,
        delta: &Fraction,
        deux_a: &Fraction,
    ) -> Result<Solution, ErreurEquation> {
        let v = self.variable;
        let abs_delta = -delta;
        let deux_a_abs = deux_a.abs();

        let re = moins_b.diviser(deux_a)?;
        let im = match abs_delta.racine_exacte() {
            Some(s) => {
                self.etape("√|Δ|", format!("√{abs_delta} = {s} (carré parfait)"));
                Valeur::Exacte(s.diviser(&deux_a_abs)?)
            }
            None => {
                let approx = racine_approchee(&abs_delta, self.chiffres);
                self.etape(
                    "√|Δ|",
                    format!("√{abs_delta} ≈ {approx} (pas un carré parfait)"),
                );
                let zero = Fraction::zero();
                Valeur::Approchee(quotient_avec_racine(
                    &zero,
                    &abs_delta,
                    false,
                    &deux_a_abs,
                    self.chiffres,
                )?)
            }
        };

        self.etape(
            "Complexes",
            format!("{v} = -b / 2a ± i·√|Δ| / |2a| avec -b / 2a = {re}"),
        );

        let re = Valeur::Exacte(re);
        let im_moins = im.oppose();
        Ok(Solution::Racines(vec![
            Racine::Complexe {
                re: re.clone(),
                im,
            },
            Racine::Complexe { re, im: im_moins },
        ]))
    }

    fn non_supporte(&mut self, n: u32) -> Solution {
        self.etape(
            "Degré",
            format!("degré {n} > 2 : résolution non supportée"),
        );
        Solution::NonSupporte(n)
    }
}
