// src/noyau/jetons.rs

use std::fmt;

use super::erreurs::ErreurCalcul;

/// Les quatre opérateurs du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Glyphe affiché (rendu canonique).
    pub fn glyphe(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// Applique l’opérateur à (gauche, droite) en arithmétique i64 vérifiée.
    ///
    /// Division : troncature vers zéro (division native i64).
    pub fn appliquer(self, gauche: i64, droite: i64) -> Result<i64, ErreurCalcul> {
        let res = match self {
            Operateur::Plus => gauche.checked_add(droite),
            Operateur::Moins => gauche.checked_sub(droite),
            Operateur::Fois => gauche.checked_mul(droite),
            Operateur::Divise => {
                if droite == 0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                // seul cas restant : i64::MIN ÷ -1
                gauche.checked_div(droite)
            }
        };
        res.ok_or(ErreurCalcul::Depassement)
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyphe())
    }
}

/// Jeton d’une expression : opérande entière (≥ 0) ou opérateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Jeton {
    Operande(i64),
    Operateur(Operateur),
}

impl Jeton {
    pub fn est_operateur(&self) -> bool {
        matches!(self, Jeton::Operateur(_))
    }
}

impl From<i64> for Jeton {
    fn from(v: i64) -> Self {
        Jeton::Operande(v)
    }
}

impl From<Operateur> for Jeton {
    fn from(op: Operateur) -> Self {
        Jeton::Operateur(op)
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Operande(v) => write!(f, "{v}"),
            Jeton::Operateur(op) => write!(f, "{op}"),
        }
    }
}
