//! src/app/etat.rs
//!
//! État UI (sans vue) : orchestration entre les saisies et le noyau.
//!
//! Rôle : tenir l’expression courante, le texte affiché, la dernière erreur,
//! les mémoires et leur visibilité ; chaque saisie correspond à UNE opération
//! du noyau.
//!
//! Contrats :
//! - Aucun rendu ici (pas d’egui).
//! - Échec du calcul : l’expression est CONSERVÉE (correction possible).
//! - Succès : le résultat reste affiché ; la saisie suivante repart d’une
//!   expression vide.

use tracing::{debug, info, warn};

use crate::noyau::{
    Calculateur, DepotEnMemoire, DepotMemoires, ErreurCalcul, Expression, Memoires, Operateur,
};

#[derive(Clone, Debug)]
pub struct AppCalc<D = DepotEnMemoire> {
    calculateur: Calculateur,

    // --- entrée utilisateur ---
    expression: Expression,

    // --- sorties ---
    texte: String,                    // rendu de l’expression, ou résultat
    resultat: Option<i64>,            // Some => résultat affiché (état “évalué”)
    erreur: Option<ErreurCalcul>,     // événement d’erreur du dernier calcul

    // --- mémoires ---
    depot: D,
    memoires_visibles: bool,
}

impl<D: Default> Default for AppCalc<D> {
    fn default() -> Self {
        Self::new(Calculateur::new(), D::default())
    }
}

impl<D> AppCalc<D> {
    pub fn new(calculateur: Calculateur, depot: D) -> Self {
        Self {
            calculateur,
            expression: Expression::vide(),
            texte: String::new(),
            resultat: None,
            erreur: None,
            depot,
            memoires_visibles: false,
        }
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    #[cfg(test)]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn resultat(&self) -> Option<i64> {
        self.resultat
    }

    pub fn erreur(&self) -> Option<ErreurCalcul> {
        self.erreur
    }

    pub fn memoires_visibles(&self) -> bool {
        self.memoires_visibles
    }

    #[cfg(test)]
    pub fn depot(&self) -> &D {
        &self.depot
    }

    /* ------------------------ Saisies ------------------------ */

    /// Chiffre 0..=9 (les autres valeurs sont ignorées : validation d’entrée).
    pub fn ajouter_chiffre(&mut self, d: u8) {
        if d > 9 {
            warn!(d, "chiffre hors bornes ignoré");
            return;
        }
        let e = self.expression_de_saisie().ajouter_chiffre(d);
        self.remplacer(e);
    }

    pub fn ajouter_operateur(&mut self, op: Operateur) {
        let e = self.expression_de_saisie().ajouter_operateur(op);
        self.remplacer(e);
    }

    /// DEL : retire le dernier opérateur ou le dernier chiffre.
    pub fn supprimer_dernier(&mut self) {
        let e = self.expression_de_saisie().supprimer_dernier();
        self.remplacer(e);
    }

    /// AC : remise à zéro de l’expression et de l’affichage (mémoires gardées).
    pub fn effacer(&mut self) {
        debug!("effacement");
        self.resultat = None;
        self.remplacer(Expression::vide());
    }

    pub fn basculer_memoires(&mut self) {
        self.memoires_visibles = !self.memoires_visibles;
        debug!(visibles = self.memoires_visibles, "bascule mémoires");
    }

    /// Expression de départ pour une saisie : vide après un résultat affiché.
    fn expression_de_saisie(&mut self) -> Expression {
        if self.resultat.take().is_some() {
            Expression::vide()
        } else {
            self.expression.clone()
        }
    }

    fn remplacer(&mut self, expression: Expression) {
        self.erreur = None;
        self.texte = expression.to_string();
        debug!(texte = %self.texte, "expression");
        self.expression = expression;
    }
}

impl<D: DepotMemoires> AppCalc<D> {
    /// `=` : succès => résultat affiché + mémoire déposée ;
    /// échec => événement d’erreur, expression intacte.
    pub fn calculer(&mut self) {
        if self.resultat.is_some() {
            // déjà évalué : rien de neuf à calculer
            return;
        }

        match self.calculateur.memoriser(&self.expression) {
            Ok(memoire) => {
                info!(%memoire, "calcul");
                self.resultat = Some(memoire.resultat);
                self.texte = memoire.resultat.to_string();
                self.erreur = None;
                self.expression = Expression::vide();
                self.depot.ajouter(memoire);
            }
            Err(e) => {
                warn!(expression = %self.expression, erreur = %e, "calcul impossible");
                self.erreur = Some(e);
            }
        }
    }

    pub fn memoires(&self) -> Memoires {
        self.depot.memoires()
    }
}
