//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - jetons.rs      : opérandes + opérateurs (glyphes, application vérifiée)
//! - expression.rs  : expression en construction (valeur immuable)
//! - calculateur.rs : pli gauche → droite, sans priorité
//! - memoire.rs     : mémoires (expression + résultat) + dépôt
//! - erreurs.rs     : erreurs du calcul
//!
//! Pas d’E/S, pas d’état partagé : que des valeurs.

pub mod calculateur;
pub mod erreurs;
pub mod expression;
pub mod jetons;
pub mod memoire;

#[cfg(test)]
mod tests_proprietes;

// API publique
pub use calculateur::Calculateur;
pub use erreurs::ErreurCalcul;
pub use expression::Expression;
pub use jetons::Operateur;
pub use memoire::{DepotEnMemoire, DepotMemoires, Memoires};
