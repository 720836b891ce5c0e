//! Tests de propriétés : saisies aléatoires bornées, RNG déterministe.
//!
//! Invariants vérifiés sur chaque état traversé :
//! - jamais d’opérateur en tête, jamais deux opérateurs adjacents
//! - complète <=> l’évaluation ne répond pas `ExpressionIncomplete`
//! - rejouer les jetons reconstruit la même expression
//! - supprimer_dernier annule un ajout de chiffre (hors zéro de tête)

use super::calculateur::Calculateur;
use super::erreurs::ErreurCalcul;
use super::expression::Expression;
use super::jetons::{Jeton, Operateur};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Saisies ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Saisie {
    Chiffre(u8),
    Operateur(Operateur),
    Retour,
}

fn gen_saisie(rng: &mut Rng, avec_retour: bool) -> Saisie {
    match rng.pick(if avec_retour { 10 } else { 8 }) {
        0..=4 => Saisie::Chiffre(rng.pick(10) as u8),
        5..=7 => Saisie::Operateur(Operateur::TOUS[rng.pick(4) as usize]),
        _ => Saisie::Retour,
    }
}

fn appliquer(e: &Expression, s: Saisie) -> Expression {
    match s {
        Saisie::Chiffre(d) => e.ajouter_chiffre(d),
        Saisie::Operateur(op) => e.ajouter_operateur(op),
        Saisie::Retour => e.supprimer_dernier(),
    }
}

fn check_invariants(e: &Expression) {
    let jetons = e.jetons();

    if let Some(premier) = jetons.first() {
        assert!(!premier.est_operateur(), "opérateur en tête: {e}");
    }
    for paire in jetons.windows(2) {
        assert_ne!(
            paire[0].est_operateur(),
            paire[1].est_operateur(),
            "jetons adjacents de même nature: {e}"
        );
    }
    for j in jetons {
        if let Jeton::Operande(v) = j {
            assert!(*v >= 0, "opérande négative: {e}");
        }
    }

    let complete = !jetons.is_empty() && !jetons[jetons.len() - 1].est_operateur();
    assert_eq!(e.est_complete(), complete, "complétude: {e}");

    let evaluee = Calculateur::new().evaluer(e);
    assert_eq!(
        evaluee == Err(ErreurCalcul::ExpressionIncomplete),
        !complete,
        "évaluation vs complétude: {e} => {evaluee:?}"
    );
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn prop_chiffres_forment_le_nombre_decimal() {
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..500 {
        let longueur = 1 + rng.pick(15) as usize;
        let chiffres: Vec<u8> = (0..longueur).map(|_| rng.pick(10) as u8).collect();

        let e = chiffres
            .iter()
            .fold(Expression::vide(), |e, &d| e.ajouter_chiffre(d));

        let attendu: i64 = chiffres
            .iter()
            .map(|d| d.to_string())
            .collect::<String>()
            .parse()
            .unwrap();

        assert_eq!(e.jetons(), &[Jeton::Operande(attendu)], "chiffres={chiffres:?}");
    }
}

#[test]
fn prop_invariants_sur_saisies_aleatoires() {
    let mut rng = Rng::new(42);

    for _ in 0..300 {
        let mut e = Expression::vide();
        for _ in 0..(1 + rng.pick(30)) {
            e = appliquer(&e, gen_saisie(&mut rng, true));
            check_invariants(&e);
        }
    }
}

#[test]
fn prop_rejouer_les_jetons_reconstruit_l_expression() {
    let mut rng = Rng::new(7);

    for _ in 0..300 {
        let mut e = Expression::vide();
        for _ in 0..(1 + rng.pick(20)) {
            e = appliquer(&e, gen_saisie(&mut rng, false));
        }

        let rejouee = Expression::depuis_jetons(e.jetons().iter().copied());
        assert_eq!(rejouee, e);
        assert_eq!(rejouee.to_string(), e.to_string());
    }
}

#[test]
fn prop_retour_annule_un_chiffre() {
    let mut rng = Rng::new(1234);

    for _ in 0..300 {
        let mut e = Expression::vide();
        for _ in 0..rng.pick(12) {
            e = appliquer(&e, gen_saisie(&mut rng, false));
        }

        // 0 puis d donne d (pas 0d) : retour retire alors tout le jeton
        if e.dernier() == Some(&Jeton::Operande(0)) {
            continue;
        }

        let d = rng.pick(10) as u8;
        let apres = e.ajouter_chiffre(d);
        if apres != e {
            assert_eq!(apres.supprimer_dernier(), e, "e={e} d={d}");
        }
    }
}

#[test]
fn prop_operateur_sur_vide_sans_effet() {
    for op in Operateur::TOUS {
        let e = Expression::vide().ajouter_operateur(op);
        assert_eq!(e, Expression::vide());
        assert_eq!(e.to_string(), "");
    }
}

#[test]
fn prop_pli_gauche_a_droite() {
    let mut rng = Rng::new(99);

    for _ in 0..300 {
        let mut e = Expression::vide().ajouter_chiffre(rng.pick(10) as u8);
        let mut attendu: Option<i64> = Some(e_valeur(&e));

        for _ in 0..rng.pick(6) {
            let op = Operateur::TOUS[rng.pick(4) as usize];
            let d = rng.pick(10) as u8;
            e = e.ajouter_operateur(op).ajouter_chiffre(d);
            attendu = attendu.and_then(|acc| op.appliquer(acc, i64::from(d)).ok());
        }

        match attendu {
            Some(v) => assert_eq!(Calculateur::new().evaluer(&e), Ok(v), "e={e}"),
            None => assert!(Calculateur::new().evaluer(&e).is_err(), "e={e}"),
        }
    }
}

fn e_valeur(e: &Expression) -> i64 {
    match e.jetons() {
        [Jeton::Operande(v)] => *v,
        autre => panic!("opérande seule attendue: {autre:?}"),
    }
}
