//! Noyau — calcul
//!
//! Pli gauche → droite, SANS priorité des opérateurs :
//! `2 + 3 × 4` vaut `(2 + 3) × 4 = 20` (choix assumé, pas un oubli).

use super::erreurs::ErreurCalcul;
use super::expression::Expression;
use super::jetons::Jeton;
use super::memoire::Memoire;

#[derive(Clone, Copy, Debug, Default)]
pub struct Calculateur;

impl Calculateur {
    pub fn new() -> Self {
        Self
    }

    /// Évalue une expression complète.
    ///
    /// Erreurs :
    /// - `ExpressionIncomplete` : vide ou terminée par un opérateur
    /// - `DivisionParZero`, `Depassement` : en cours de pli
    ///
    /// L’expression n’est jamais modifiée (valeur empruntée).
    pub fn evaluer(&self, expression: &Expression) -> Result<i64, ErreurCalcul> {
        if !expression.est_complete() {
            return Err(ErreurCalcul::ExpressionIncomplete);
        }

        let mut jetons = expression.jetons().iter();
        let mut resultat = match jetons.next() {
            Some(Jeton::Operande(v)) => *v,
            _ => return Err(ErreurCalcul::ExpressionIncomplete),
        };

        // après la tête : paires (opérateur, opérande)
        while let (Some(Jeton::Operateur(op)), Some(Jeton::Operande(v))) =
            (jetons.next(), jetons.next())
        {
            resultat = op.appliquer(resultat, *v)?;
        }

        Ok(resultat)
    }

    /// Évalue puis emballe le couple (expression, résultat) pour le dépôt.
    pub fn memoriser(&self, expression: &Expression) -> Result<Memoire, ErreurCalcul> {
        let resultat = self.evaluer(expression)?;
        Ok(Memoire::new(expression.clone(), resultat))
    }
}
