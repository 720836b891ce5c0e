//! Noyau — expression en construction
//!
//! Valeur immuable : chaque opération retourne une NOUVELLE expression
//! (remplacement, pas de mutation en place).
//!
//! Invariants (garantis par les seules opérations publiques) :
//! - jamais deux opérateurs adjacents
//! - jamais d’opérateur en tête
//! - jamais deux opérandes adjacentes (les chiffres se concatènent)
//! - opérandes ≥ 0

use std::fmt;

use super::jetons::{Jeton, Operateur};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Expression {
    jetons: Vec<Jeton>,
}

impl Expression {
    pub fn vide() -> Self {
        Self::default()
    }

    /// Rejoue une suite de jetons à travers les règles d’ajout.
    ///
    /// Une opérande est saisie chiffre par chiffre : deux opérandes consécutives
    /// se concatènent (3 puis 2 => 32), comme au clavier.
    /// Précondition : opérandes ≥ 0.
    pub fn depuis_jetons<I>(jetons: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Jeton>,
    {
        jetons
            .into_iter()
            .map(Into::<Jeton>::into)
            .fold(Self::vide(), |expr, jeton| match jeton {
                Jeton::Operateur(op) => expr.ajouter_operateur(op),
                Jeton::Operande(v) => {
                    debug_assert!(v >= 0, "opérande négative: {v}");
                    v.unsigned_abs()
                        .to_string()
                        .bytes()
                        .fold(expr, |e, b| e.ajouter_chiffre(b - b'0'))
                }
            })
    }

    /// Lecture seule (pas d’accès mutable public).
    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }

    pub fn dernier(&self) -> Option<&Jeton> {
        self.jetons.last()
    }

    /// Ajoute un chiffre (0..=9).
    ///
    /// - vide ou après un opérateur : nouvelle opérande
    /// - après une opérande v : v·10 + d
    ///
    /// Un chiffre qui ferait dépasser i64 est ignoré (l’ajout reste total).
    /// Précondition : d ≤ 9 (validation à la charge de l’appelant).
    #[must_use]
    pub fn ajouter_chiffre(&self, d: u8) -> Self {
        debug_assert!(d <= 9, "chiffre hors bornes: {d}");

        let mut jetons = self.jetons.clone();
        match jetons.last_mut() {
            Some(Jeton::Operande(v)) => {
                let Some(suivant) = v
                    .checked_mul(10)
                    .and_then(|x| x.checked_add(i64::from(d)))
                else {
                    return self.clone();
                };
                *v = suivant;
            }
            _ => jetons.push(Jeton::Operande(i64::from(d))),
        }
        Self { jetons }
    }

    /// Ajoute un opérateur.
    ///
    /// - vide : aucun effet (un opérateur ne peut pas commencer l’expression)
    /// - après un opérateur : le dernier gagne (remplacement)
    /// - après une opérande : ajout
    #[must_use]
    pub fn ajouter_operateur(&self, op: Operateur) -> Self {
        let mut jetons = self.jetons.clone();
        match jetons.last_mut() {
            None => {}
            Some(Jeton::Operateur(dernier)) => *dernier = op,
            Some(Jeton::Operande(_)) => jetons.push(Jeton::Operateur(op)),
        }
        Self { jetons }
    }

    /// Retire le dernier symbole :
    /// - opérateur : retiré
    /// - opérande à plusieurs chiffres : perd son dernier chiffre (32 => 3)
    /// - opérande à un chiffre : retirée
    ///
    /// Défait le dernier chiffre saisi, SAUF après un zéro de tête :
    /// 0 puis 5 donne l’opérande 5, que DEL retire entièrement (pas de retour à 0).
    ///
    /// Vide : aucun effet.
    #[must_use]
    pub fn supprimer_dernier(&self) -> Self {
        let mut jetons = self.jetons.clone();
        match jetons.pop() {
            Some(Jeton::Operande(v)) if v >= 10 => jetons.push(Jeton::Operande(v / 10)),
            _ => {}
        }
        Self { jetons }
    }

    /// Évaluable : non vide, alternance Opérande, Opérateur, …, Opérande.
    pub fn est_complete(&self) -> bool {
        self.jetons.len() % 2 == 1
            && self.jetons.iter().enumerate().all(|(i, jeton)| {
                // positions paires : opérandes ; impaires : opérateurs
                jeton.est_operateur() == (i % 2 == 1)
            })
    }
}

/// Rendu canonique : jetons séparés par une espace, opérateurs en glyphes.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut premier = true;
        for jeton in &self.jetons {
            if !premier {
                f.write_str(" ")?;
            }
            write!(f, "{jeton}")?;
            premier = false;
        }
        Ok(())
    }
}
