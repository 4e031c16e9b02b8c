//! Hidden-state reconstruction: inverse of the observation codec.
//!
//! An observation fixes every scalar of the state but hides the interior
//! ordering of the chamber. Reconstruction rebuilds concrete candidate
//! states: scalars copied verbatim, chamber orderings either sampled or
//! enumerated. When a magnifier flag is set, the revealed shell is pinned
//! as the tail element and never permuted.

use crate::core::{Chamber, GameRng, GameState, Inventory, Item, Player, PlayerMap, Shell};
use crate::error::Error;

use super::encoder::Observation;

/// Capability interface for rebuilding concrete states from an observation.
pub trait Reconstructor {
    /// Produce one or more states consistent with `obs`.
    ///
    /// Every returned state encodes back to `obs` exactly (viewer =
    /// Player 1, who is made the acting player). Never returns an empty
    /// list; an inconsistent observation is an error instead.
    fn reconstruct(&self, obs: &Observation, rng: &mut GameRng)
        -> Result<Vec<GameState>, Error>;
}

/// Scalar fields shared by every candidate, parsed and validated once.
struct Parsed {
    base: GameState,
    free_lives: usize,
    free_blanks: usize,
    pinned: Option<Shell>,
}

fn parse(obs: &Observation) -> Result<Parsed, Error> {
    if obs.as_slice().iter().any(|&v| v < 0) {
        return Err(Error::BadObservation("negative field".into()));
    }
    if obs.revealed_live() && obs.revealed_blank() {
        return Err(Error::BadObservation(
            "both magnifier flags set".into(),
        ));
    }

    let pinned = if obs.revealed_live() {
        Some(Shell::Live)
    } else if obs.revealed_blank() {
        Some(Shell::Blank)
    } else {
        None
    };

    let lives = obs.live_count() as usize;
    let blanks = obs.blank_count() as usize;
    let (free_lives, free_blanks) = match pinned {
        Some(Shell::Live) if lives == 0 => {
            return Err(Error::BadObservation(
                "revealed live shell but zero live count".into(),
            ));
        }
        Some(Shell::Blank) if blanks == 0 => {
            return Err(Error::BadObservation(
                "revealed blank shell but zero blank count".into(),
            ));
        }
        Some(Shell::Live) => (lives - 1, blanks),
        Some(Shell::Blank) => (lives, blanks - 1),
        None => (lives, blanks),
    };

    let inventory = PlayerMap::new(|p| {
        let counts = match p {
            Player::Player1 => obs.self_items(),
            Player::Player2 => obs.opponent_items(),
        };
        let mut slots = [0u8; Item::COUNT];
        for (slot, &c) in slots.iter_mut().zip(counts.iter()) {
            *slot = c.min(u8::MAX as i32) as u8;
        }
        Inventory::from_counts(slots)
    });

    // The viewer is the acting player; seat them as Player 1.
    let base = GameState {
        turn: Player::Player1,
        chamber: Chamber::empty(),
        init_life: obs.init_life(),
        life: PlayerMap::new(|p| match p {
            Player::Player1 => obs.self_life(),
            Player::Player2 => obs.opponent_life(),
        }),
        inventory,
        opponent_handcuffed: obs.opponent_handcuffed(),
        shell_revealed: pinned,
        shotgun_sawed: obs.sawed(),
    };

    Ok(Parsed {
        base,
        free_lives,
        free_blanks,
        pinned,
    })
}

fn build_state(parsed: &Parsed, mut ordering: Vec<Shell>) -> GameState {
    if let Some(shell) = parsed.pinned {
        ordering.push(shell);
    }
    parsed.base.with_chamber(Chamber::from(ordering))
}

/// Reconstructs by sampling uniformly random orderings.
#[derive(Clone, Copy, Debug)]
pub struct SampledReconstructor {
    samples: usize,
}

impl SampledReconstructor {
    /// `samples` candidate states per observation, at least one.
    #[must_use]
    pub fn new(samples: usize) -> Self {
        Self {
            samples: samples.max(1),
        }
    }
}

impl Reconstructor for SampledReconstructor {
    fn reconstruct(
        &self,
        obs: &Observation,
        rng: &mut GameRng,
    ) -> Result<Vec<GameState>, Error> {
        let parsed = parse(obs)?;

        let mut states = Vec::with_capacity(self.samples);
        for _ in 0..self.samples {
            let mut shells: Vec<Shell> = std::iter::repeat(Shell::Live)
                .take(parsed.free_lives)
                .chain(std::iter::repeat(Shell::Blank).take(parsed.free_blanks))
                .collect();
            rng.shuffle(&mut shells);
            states.push(build_state(&parsed, shells));
        }
        Ok(states)
    }
}

/// Reconstructs by enumerating all distinct orderings, cap-bounded.
///
/// Shells of equal kind are indistinguishable, so the enumeration walks
/// distinct multiset arrangements directly (multinomial-coefficient many,
/// not factorial many) and stops deterministically once the cap is hit.
#[derive(Clone, Copy, Debug)]
pub struct ExhaustiveReconstructor {
    max_states: usize,
}

impl ExhaustiveReconstructor {
    /// Enumerate at most `max_states` orderings, at least one.
    #[must_use]
    pub fn new(max_states: usize) -> Self {
        Self {
            max_states: max_states.max(1),
        }
    }

    fn enumerate(
        &self,
        lives: usize,
        blanks: usize,
        prefix: &mut Vec<Shell>,
        out: &mut Vec<Vec<Shell>>,
    ) {
        if out.len() >= self.max_states {
            return;
        }
        if lives == 0 && blanks == 0 {
            out.push(prefix.clone());
            return;
        }
        if lives > 0 {
            prefix.push(Shell::Live);
            self.enumerate(lives - 1, blanks, prefix, out);
            prefix.pop();
        }
        if blanks > 0 {
            prefix.push(Shell::Blank);
            self.enumerate(lives, blanks - 1, prefix, out);
            prefix.pop();
        }
    }
}

impl Reconstructor for ExhaustiveReconstructor {
    fn reconstruct(
        &self,
        obs: &Observation,
        _rng: &mut GameRng,
    ) -> Result<Vec<GameState>, Error> {
        let parsed = parse(obs)?;

        let mut orderings = Vec::new();
        let mut prefix = Vec::with_capacity(parsed.free_lives + parsed.free_blanks);
        self.enumerate(parsed.free_lives, parsed.free_blanks, &mut prefix, &mut orderings);

        Ok(orderings
            .into_iter()
            .map(|ordering| build_state(&parsed, ordering))
            .collect())
    }
}
