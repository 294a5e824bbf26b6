//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées (termes, puissances, chiffres)
//! - budget temps global
//! - on accepte seulement les erreurs de la famille syntaxique (jamais DivisionParZero)
//! - invariant clé : la forme réduite se relit en le même polynôme

use std::time::{Duration, Instant};

use super::erreur::ErreurEquation;
use super::reglages::Reglages;
use super::resoudre_equation;
use super::solveur::Solution;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurEquation) -> bool {
    // Liste blanche : une entrée mutée peut être refusée, mais jamais
    // par une division par zéro (le solveur ne doit pas en produire).
    !matches!(e, ErreurEquation::DivisionParZero)
}

/* ------------------------ Génération d'équations (bornée) ------------------------ */

fn gen_coeff(rng: &mut Rng) -> String {
    let n = rng.pick(20);
    match rng.pick(6) {
        0 => format!("{n}"),
        1 => format!("{n}.{}", rng.pick(100)),
        2 => format!("{n}e{}", rng.pick(4)),
        3 => format!("{n}.5E-{}", rng.pick(4)),
        4 => "0".to_string(),
        _ => format!("0.{:03}", rng.pick(1000)),
    }
}

fn gen_var(rng: &mut Rng) -> &'static str {
    if rng.coin() {
        "X"
    } else {
        "x"
    }
}

fn gen_terme(rng: &mut Rng) -> String {
    let p = rng.pick(4);
    let v = gen_var(rng);
    match rng.pick(6) {
        0 => gen_coeff(rng),
        1 => v.to_string(),
        2 => format!("{v}^{p}"),
        3 => format!("{}{v}", gen_coeff(rng)),
        4 => format!("{} * {v}^{p}", gen_coeff(rng)),
        _ => format!("{}*{v} ^ {p}", gen_coeff(rng)),
    }
}

fn gen_membre(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(4);
    let mut out = String::new();
    for k in 0..n {
        let signe = match rng.pick(4) {
            0 => "-",
            1 => "+",
            2 if k > 0 => "+ -",
            _ => "",
        };
        let signe = if k > 0 && signe.is_empty() { "+" } else { signe };
        if k > 0 {
            out.push(' ');
        }
        out.push_str(signe);
        if rng.coin() {
            out.push(' ');
        }
        out.push_str(&gen_terme(rng));
    }
    out
}

fn gen_equation(rng: &mut Rng) -> String {
    format!("{} = {}", gen_membre(rng), gen_membre(rng))
}

/// Mutation bornée : casse l'équation d'une façon “réaliste”.
fn muter(rng: &mut Rng, eq: &str) -> String {
    let mut s = eq.to_string();
    match rng.pick(9) {
        0 => s = s.replacen('=', "", 1),
        1 => s.push_str(" = 1"),
        2 => s.push_str(" + y"),
        3 => s.push('#'),
        4 => s = s.replacen('^', "^-", 1),
        5 => s.push_str(" + "),
        6 => s = s.replacen('X', "X X", 1),
        // une fois sur 4 environ : intacte
        _ => {}
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_relecture_forme_reduite() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let reglages = Reglages::default();

    for _ in 0..300 {
        budget(t0, max);

        let eq = gen_equation(&mut rng);
        let r = resoudre_equation(&eq, &reglages)
            .unwrap_or_else(|e| panic!("équation générée refusée: eq={eq:?} err={e}"));

        // degré == puissance max survivante
        let max_p = r.polynome.coefficients().keys().next_back().copied().unwrap_or(0);
        assert_eq!(r.degre, max_p, "eq={eq:?}");
        assert!(r.degre <= 3, "eq={eq:?}");

        // forme réduite relisible, même polynôme
        let relu = resoudre_equation(&r.forme_reduite, &reglages)
            .unwrap_or_else(|e| panic!("forme réduite illisible: {:?} err={e}", r.forme_reduite));
        assert_eq!(relu.polynome.coefficients(), r.polynome.coefficients(), "eq={eq:?}");

        // degré <= 2 => jamais NonSupporte ; degré 3 => toujours
        match (&r.resolution.solution, r.degre) {
            (Solution::NonSupporte(n), 3) => assert_eq!(*n, 3),
            (Solution::NonSupporte(_), _) => panic!("NonSupporte inattendu: eq={eq:?}"),
            (_, 3) => panic!("degré 3 résolu: eq={eq:?}"),
            _ => {}
        }
    }
}

#[test]
fn fuzz_safe_mutations_erreurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let reglages = Reglages::default();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let eq = gen_equation(&mut rng);
        let eq = muter(&mut rng, &eq);

        match resoudre_equation(&eq, &reglages) {
            Ok(r) => {
                assert!(!r.lignes(&reglages).is_empty());
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: eq={eq:?} err={e}"
                );
                assert!(!e.to_string().is_empty());
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d'erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let sortie = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        let reglages = Reglages::default();
        (0..50)
            .map(|_| {
                let eq = gen_equation(&mut rng);
                match resoudre_equation(&eq, &reglages) {
                    Ok(r) => r.lignes(&reglages).join("\n"),
                    Err(e) => e.to_string(),
                }
            })
            .collect()
    };

    let a = sortie(0x5EED);
    budget(t0, max);
    let b = sortie(0x5EED);
    budget(t0, max);
    assert_eq!(a, b);
}

#[test]
fn fuzz_safe_octets_arbitraires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    // alphabet volontairement hostile (unicode, opérateurs non supportés)
    const ALPHABET: &[char] = &[
        'X', 'x', 'y', '0', '1', '9', '.', 'e', 'E', '+', '-', '*', '^', '=', ' ', '/', '(',
        'é', '√', '\t',
    ];

    let mut rng = Rng::new(0xFEED_u64);
    let reglages = Reglages::default();

    for _ in 0..500 {
        budget(t0, max);

        let n = 1 + rng.pick(16) as usize;
        let eq: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        if let Err(e) = resoudre_equation(&eq, &reglages) {
            assert!(
                is_erreur_attendue(&e),
                "erreur non attendue: eq={eq:?} err={e}"
            );
        }
    }
}
