// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé tactile : 0-9, + - × ÷, DEL, =, AC
// - Panneau mémoires (historique) repliable
//
// Le clavier est géré dans app.rs (une seule source d’événements).

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{DepotMemoires, Operateur};

/// Taille des touches du pavé.
const TOUCHE: [f32; 2] = [64.0, 44.0];

impl<D: DepotMemoires> AppCalc<D> {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();

        let titre = if self.memoires_visibles() {
            "Masquer les mémoires"
        } else {
            "Mémoires"
        };
        if ui.button(titre).clicked() {
            self.basculer_memoires();
        }

        if self.memoires_visibles() {
            ui.add_space(6.0);
            self.ui_memoires(ui);
        }
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = egui::RichText::new(self.texte()).monospace().size(28.0);
                    // résultat affiché : en gras, la prochaine saisie repart de zéro
                    let texte = if self.resultat().is_some() {
                        texte.strong()
                    } else {
                        texte
                    };
                    ui.label(texte);
                });
            });

        if let Some(e) = self.erreur() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, e.to_string());
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche_chiffre(ui, 7);
                self.touche_chiffre(ui, 8);
                self.touche_chiffre(ui, 9);
                self.touche_operateur(ui, Operateur::Divise);
                ui.end_row();

                self.touche_chiffre(ui, 4);
                self.touche_chiffre(ui, 5);
                self.touche_chiffre(ui, 6);
                self.touche_operateur(ui, Operateur::Fois);
                ui.end_row();

                self.touche_chiffre(ui, 1);
                self.touche_chiffre(ui, 2);
                self.touche_chiffre(ui, 3);
                self.touche_operateur(ui, Operateur::Moins);
                ui.end_row();

                self.touche_action(ui, "AC", "Efface l’expression", Action::Effacer);
                self.touche_chiffre(ui, 0);
                self.touche_action(ui, "DEL", "Efface le dernier symbole", Action::Supprimer);
                self.touche_operateur(ui, Operateur::Plus);
                ui.end_row();

                ui.label("");
                ui.label("");
                ui.label("");
                self.touche_action(ui, "=", "Calcule", Action::Calculer);
                ui.end_row();
            });
    }

    fn ui_memoires(&self, ui: &mut egui::Ui) {
        let memoires = self.memoires();
        if memoires.is_empty() {
            ui.weak("Aucun calcul");
            return;
        }

        egui::ScrollArea::vertical()
            .max_height(240.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for m in &memoires {
                    // deux lignes : "3 + 2" puis "= 5"
                    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                        ui.monospace(m.expression.to_string());
                        ui.monospace(format!("= {}", m.resultat));
                    });
                    ui.separator();
                }
            });
    }

    fn touche_chiffre(&mut self, ui: &mut egui::Ui, d: u8) {
        if ui.add_sized(TOUCHE, egui::Button::new(d.to_string())).clicked() {
            self.ajouter_chiffre(d);
        }
    }

    fn touche_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        if ui.add_sized(TOUCHE, egui::Button::new(op.glyphe())).clicked() {
            self.ajouter_operateur(op);
        }
    }

    fn touche_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized(TOUCHE, egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Effacer => self.effacer(),
                Action::Supprimer => self.supprimer_dernier(),
                Action::Calculer => self.calculer(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    Supprimer,
    Calculer,
}
