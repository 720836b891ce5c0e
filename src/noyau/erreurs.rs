// src/noyau/erreurs.rs

use thiserror::Error;

/// Erreurs du calcul. Ajout et suppression de jetons n’échouent jamais :
/// seules les évaluations produisent une erreur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Expression vide ou terminée par un opérateur.
    #[error("Expression incomplète")]
    ExpressionIncomplete,

    #[error("Division par zéro")]
    DivisionParZero,

    /// Résultat hors des bornes i64.
    #[error("Dépassement de capacité")]
    Depassement,
}
