// src/main.rs
//
// Solveur Q-pur — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------
// But:
// - NATIF avec une équation en argument : CLI (stdout / stderr, code de sortie)
// - NATIF sans équation                 : eframe::run_native + NativeOptions
// - WEB  (wasm32)                       : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppEquation` vit dans src/app.rs
// - Ici: point d’entrée + journalisation seulement

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod cli;

use app::AppEquation;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Solveur Q-pur";

/* ------------------------ Journalisation (natif) ------------------------ */

/// Abonné tracing sur stderr (stdout reste réservé au résultat).
/// Filtre : RUST_LOG, puis SOLVEUR_LOG, sinon "warn" ; --verbose force "debug".
#[cfg(not(target_arch = "wasm32"))]
fn installer_journal(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filtre = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_from_env("SOLVEUR_LOG"))
            .or_else(|_| EnvFilter::try_new("warn"))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // try_init : un second appel (tests) ne doit pas paniquer
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use std::process::ExitCode;

    let args = cli::Cli::parse();
    installer_journal(args.verbose);
    let reglages = args.reglages();

    // Équation en argument : mode ligne de commande
    if let Some(equation) = args.equation.as_deref() {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        return match cli::executer(equation, &reglages, &mut stdout.lock(), &mut stderr.lock()) {
            Ok(code) => ExitCode::from(code),
            Err(e) => {
                tracing::error!("écriture impossible: {e}");
                ExitCode::from(cli::SORTIE_ERREUR)
            }
        };
    }

    // Sinon : interface graphique
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 740.0])
            .with_min_inner_size([420.0, 620.0]),
        ..Default::default()
    };

    let resultat = eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppEquation::avec_reglages(reglages)))),
    );

    match resultat {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("interface graphique: {e}");
            ExitCode::FAILURE
        }
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppEquation, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        // 1) window/document
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        // 1.5) Titre onglet
        d.set_title(TITRE_APP);

        // 2) element by id
        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        // 3) cast -> HtmlCanvasElement
        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        // 4) run web
        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppEquation>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
