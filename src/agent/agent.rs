use super::wager::wager;
use crate::Chips;
use crate::Config;
use crate::Probability;
use crate::Result;
use crate::learning::Policy;
use crate::learning::Record;
use crate::learning::Update;
use crate::learning::betting;
use crate::state::Action;
use crate::state::GameState;
use crate::state::StateKey;
use crate::store::Store;
use crate::table::Table;
use crate::table::Triad;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A blackjack player that learns from every stage transition it observes.
///
/// The game loop reports each new state through
/// [`record_transition`](Agent::record_transition), asks for decisions with
/// [`choose_action`](Agent::choose_action), and calls
/// [`save_all`](Agent::save_all) once when the session ends.
pub struct Agent<S, R = SmallRng>
where
    S: Store,
    R: Rng,
{
    table: Table<S>,
    policy: Policy,
    update: Update,
    record: Record,
    prior: Option<GameState>,
    adaptive: bool,
    rng: R,
}

impl<S> Agent<S, SmallRng>
where
    S: Store,
{
    /// Seeds from `config.seed` when present, otherwise from the thread generator.
    pub fn new(store: S, config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(store, config, rng)
    }
}

impl<S, R> Agent<S, R>
where
    S: Store,
    R: Rng,
{
    pub fn with_rng(store: S, config: &Config, rng: R) -> Self {
        Self {
            table: Table::new(store, config.capacity, config.quantum),
            policy: Policy::new(config.temperature),
            update: Update::from(config),
            record: Record::default(),
            prior: None,
            adaptive: config.adaptive_wagers,
            rng,
        }
    }
    pub fn record(&self) -> &Record {
        &self.record
    }
    pub fn table(&self) -> &Table<S> {
        &self.table
    }

    /// Samples an action for `state` from the softmax over its qvalues.
    pub fn choose_action(&mut self, state: &GameState) -> Result<Action> {
        let triad = self.lookup(state)?;
        Ok(self.policy.choose(state.stage(), &triad, &mut self.rng))
    }

    /// Learns from the transition into `state`, then remembers it as the prior.
    ///
    /// Settled rounds are counted even when learning fails, so the agent's
    /// statistics stay true if the caller chooses to carry on.
    pub fn record_transition(&mut self, state: GameState) -> Result<()> {
        let learned = match self.prior.take() {
            Some(prior) => self.learn(&prior, &state),
            None => Ok(()),
        };
        if let GameState::Post(ref s) = state {
            self.record.settle(s.outcome(), s.delta());
        }
        self.prior = Some(state);
        learned
    }

    /// Betting-stage risk for the agent's current chip standing.
    pub fn current_risk_estimate(&self) -> Probability {
        betting(&self.record)
    }

    /// How much to bet given the agent's `balance`.
    ///
    /// Without adaptive wagers every bet sizes from a neutral 0.5 standing.
    /// With them, the standing is the chip delta normalized over its history.
    pub fn wager(&self, balance: Chips) -> Chips {
        let standing = match self.adaptive {
            false => 0.5,
            true => match self.record.max() - self.record.min() {
                0 => 0.5,
                range => (self.record.delta() - self.record.min()) as Probability / range as Probability,
            },
        };
        wager(standing, balance)
    }

    /// Flushes every live entry and releases the store.
    pub fn save_all(&mut self) -> Result<()> {
        self.table.save()
    }

    fn learn(&mut self, prior: &GameState, successor: &GameState) -> Result<()> {
        let before = self.lookup(prior)?;
        let after = self.lookup(successor)?;
        let triad = self
            .update
            .apply(prior, &before, successor, &after, &self.record)?;
        self.table.put(StateKey::from(prior), triad)
    }

    fn lookup(&mut self, state: &GameState) -> Result<Triad> {
        let rng = &mut self.rng;
        self.table
            .get(StateKey::from(state), state.stage(), |stage| {
                Triad::seeded(stage, rng)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::cards::Card;
    use crate::state::InRound;
    use crate::state::Outcome;
    use crate::state::PostRound;
    use crate::state::PreRound;
    use crate::store::Sqlite;

    fn config() -> Config {
        Config {
            seed: Some(11),
            ..Config::default()
        }
    }
    fn agent() -> Agent<Sqlite> {
        Agent::new(Sqlite::memory().unwrap(), &config())
    }
    fn playing() -> GameState {
        let hand = vec![Card::from(36), Card::from(20)];
        GameState::from(InRound::new(Card::from(40), hand.into()).unwrap())
    }

    #[test]
    fn chooses_actions_of_the_stage() {
        let mut agent = agent();
        let bet = GameState::from(PreRound::new(20));
        assert_eq!(agent.choose_action(&bet).unwrap(), Action::Bet);
        let action = agent.choose_action(&playing()).unwrap();
        assert!(matches!(action, Action::Hit | Action::Stand));
    }

    #[test]
    fn transitions_update_the_prior_state() {
        let mut agent = agent();
        let bet = GameState::from(PreRound::new(20));
        agent.record_transition(bet.clone()).unwrap();
        let before = agent.lookup(&bet).unwrap();
        agent.record_transition(playing()).unwrap();
        let after = agent.lookup(&bet).unwrap();
        assert_ne!(before.qvalue(0), after.qvalue(0));
        assert_eq!(after.arity(), 1);
    }

    #[test]
    fn settlements_are_counted() {
        let mut agent = agent();
        agent.record_transition(GameState::from(PreRound::new(20))).unwrap();
        agent.record_transition(playing()).unwrap();
        agent
            .record_transition(GameState::from(PostRound::new(Outcome::Loss, -20)))
            .unwrap();
        agent.record_transition(GameState::from(PreRound::new(20))).unwrap();
        assert_eq!(agent.record().losses(), 1);
        assert_eq!(agent.record().delta(), -20);
        assert_eq!(agent.current_risk_estimate(), 1.0);
    }

    #[test]
    fn same_seed_same_decisions() {
        let run = || {
            let mut agent = agent();
            (0..16)
                .map(|_| agent.choose_action(&playing()).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn flat_wagers_by_default() {
        let mut agent = agent();
        agent
            .record_transition(GameState::from(PostRound::new(Outcome::Win, 100)))
            .unwrap();
        assert_eq!(agent.wager(500), 20);
        assert_eq!(agent.wager(5), 5);
    }

    #[test]
    fn adaptive_wagers_follow_standing() {
        let config = Config {
            adaptive_wagers: true,
            ..config()
        };
        let mut agent = Agent::new(Sqlite::memory().unwrap(), &config);
        assert_eq!(agent.wager(500), 20);
        agent
            .record_transition(GameState::from(PostRound::new(Outcome::Win, 100)))
            .unwrap();
        assert_eq!(agent.wager(500), 100);
        agent
            .record_transition(GameState::from(PostRound::new(Outcome::Loss, -100)))
            .unwrap();
        assert_eq!(agent.wager(500), 10);
    }

    #[test]
    fn saving_twice_fails() {
        let mut agent = agent();
        agent.record_transition(GameState::from(PreRound::new(20))).unwrap();
        agent.save_all().unwrap();
        assert!(matches!(agent.save_all(), Err(Error::Closed)));
        assert!(matches!(
            agent.choose_action(&GameState::from(PreRound::new(20))),
            Err(Error::Closed)
        ));
    }
}
