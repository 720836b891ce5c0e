//! Noyau — mémoires (historique des calculs)
//!
//! Le noyau CONSTRUIT les mémoires ; leur stockage appartient au dépôt
//! (trait `DepotMemoires`), branché par l’application.

use std::fmt;

use super::expression::Expression;

/// Une expression complète et son résultat.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Memoire {
    pub expression: Expression,
    pub resultat: i64,
}

impl Memoire {
    pub fn new(expression: Expression, resultat: i64) -> Self {
        Self {
            expression,
            resultat,
        }
    }
}

/// `3 + 2 = 5`
impl fmt::Display for Memoire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.resultat)
    }
}

/// Liste immuable de mémoires, dans l’ordre d’ajout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memoires {
    memoires: Vec<Memoire>,
}

impl Memoires {
    /// Nouvelle liste = ancienne + `memoire` (remplacement, comme `Expression`).
    #[must_use]
    pub fn plus(&self, memoire: Memoire) -> Self {
        let mut memoires = self.memoires.clone();
        memoires.push(memoire);
        Self { memoires }
    }

    pub fn as_slice(&self) -> &[Memoire] {
        &self.memoires
    }

    pub fn len(&self) -> usize {
        self.memoires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memoires.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Memoire> {
        self.memoires.iter()
    }
}

impl<'a> IntoIterator for &'a Memoires {
    type Item = &'a Memoire;
    type IntoIter = std::slice::Iter<'a, Memoire>;

    fn into_iter(self) -> Self::IntoIter {
        self.memoires.iter()
    }
}

impl FromIterator<Memoire> for Memoires {
    fn from_iter<I: IntoIterator<Item = Memoire>>(iter: I) -> Self {
        Self {
            memoires: iter.into_iter().collect(),
        }
    }
}

/// Collaborateur de persistance.
pub trait DepotMemoires {
    fn ajouter(&mut self, memoire: Memoire);

    fn memoires(&self) -> Memoires;
}

/// Dépôt en mémoire vive (durée de vie = session).
#[derive(Clone, Debug, Default)]
pub struct DepotEnMemoire {
    memoires: Memoires,
}

impl DepotMemoires for DepotEnMemoire {
    fn ajouter(&mut self, memoire: Memoire) {
        self.memoires = self.memoires.plus(memoire);
    }

    fn memoires(&self) -> Memoires {
        self.memoires.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::{Jeton, Operateur};

    fn trois_plus_deux() -> Memoire {
        let e = Expression::depuis_jetons([
            Jeton::Operande(3),
            Jeton::Operateur(Operateur::Plus),
            Jeton::Operande(2),
        ]);
        Memoire::new(e, 5)
    }

    #[test]
    fn affichage() {
        assert_eq!(trois_plus_deux().to_string(), "3 + 2 = 5");
    }

    #[test]
    fn plus_ne_modifie_pas_l_original() {
        let vide = Memoires::default();
        let une = vide.plus(trois_plus_deux());
        assert!(vide.is_empty());
        assert_eq!(une.len(), 1);
        assert_eq!(une.as_slice(), &[trois_plus_deux()]);
    }

    #[test]
    fn depot_garde_l_ordre() {
        let mut depot = DepotEnMemoire::default();
        depot.ajouter(trois_plus_deux());
        depot.ajouter(Memoire::new(Expression::depuis_jetons([7i64]), 7));

        let resultats: Vec<i64> = depot.memoires().iter().map(|m| m.resultat).collect();
        assert_eq!(resultats, [5, 7]);
    }
}
