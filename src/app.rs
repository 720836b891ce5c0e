// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier en saisies (chiffres, + - * x /, Enter/=, Backspace, Escape)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::{DepotMemoires, Operateur};

/// Une saisie clavier, déjà traduite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Touche {
    Chiffre(u8),
    Operateur(Operateur),
    Calculer,
    Supprimer,
    Effacer,
}

/// Caractère tapé => touche (None si sans rapport avec le pavé).
fn touche_de_caractere(c: char) -> Option<Touche> {
    match c {
        '0'..='9' => Some(Touche::Chiffre(c as u8 - b'0')),
        '+' => Some(Touche::Operateur(Operateur::Plus)),
        '-' => Some(Touche::Operateur(Operateur::Moins)),
        '*' | 'x' | 'X' | '×' => Some(Touche::Operateur(Operateur::Fois)),
        '/' | '÷' => Some(Touche::Operateur(Operateur::Divise)),
        '=' => Some(Touche::Calculer),
        _ => None,
    }
}

/// Touche spéciale => saisie.
///
/// Enter n’est pris que si aucun widget n’a le focus : un bouton focus
/// (navigation Tab) s’active déjà sur Enter, sinon double déclenchement.
fn touche_de_cle(key: egui::Key, widget_focus: bool) -> Option<Touche> {
    match key {
        egui::Key::Enter if !widget_focus => Some(Touche::Calculer),
        egui::Key::Backspace => Some(Touche::Supprimer),
        egui::Key::Escape => Some(Touche::Effacer),
        _ => None,
    }
}

fn touches_des_evenements(events: &[egui::Event], widget_focus: bool) -> Vec<Touche> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().filter_map(touche_de_caractere)),
            egui::Event::Key {
                key, pressed: true, ..
            } => out.extend(touche_de_cle(*key, widget_focus)),
            _ => {}
        }
    }
    out
}

impl<D: DepotMemoires> AppCalc<D> {
    fn appliquer_touche(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(d) => self.ajouter_chiffre(d),
            Touche::Operateur(op) => self.ajouter_operateur(op),
            Touche::Calculer => self.calculer(),
            Touche::Supprimer => self.supprimer_dernier(),
            Touche::Effacer => self.effacer(),
        }
    }
}

impl<D: DepotMemoires> eframe::App for AppCalc<D> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pas de champ texte : le clavier alimente directement l’état.
        let widget_focus = ctx.memory(|m| m.focused().is_some());
        let touches = ctx.input(|i| touches_des_evenements(&i.events, widget_focus));
        for touche in touches {
            self.appliquer_touche(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.ui(ui));
        });
    }
}
