use super::account::Account;
use super::showdown::showdown;
use super::summary::Summary;
use crate::AGENT_CHIPS;
use crate::Chips;
use crate::Config;
use crate::DEALER_CHIPS;
use crate::DEALER_STANDS;
use crate::Error;
use crate::Result;
use crate::agent::Agent;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::state::Action;
use crate::state::GameState;
use crate::state::InRound;
use crate::state::Outcome;
use crate::state::PostRound;
use crate::state::PreRound;
use crate::state::Stage;
use crate::store::Store;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One agent against the house, stepped one stage at a time.
///
/// Each step reports the new state to the agent before asking it anything.
/// Store failures the agent can live without are logged and the session
/// carries on in memory; everything else ends it.
pub struct Game<S>
where
    S: Store,
{
    agent: Agent<S>,
    player: Account,
    house: Account,
    deck: Deck,
    dealer: Hand,
    hand: Hand,
    stage: Stage,
    wager: Chips,
    rounds: usize,
    rng: SmallRng,
}

impl<S> Game<S>
where
    S: Store,
{
    /// Both the deck and the agent draw from `config.seed` when it is set.
    pub fn new(store: S, config: &Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let agent = Agent::with_rng(store, config, SmallRng::from_rng(&mut rng));
        Self {
            agent,
            player: Account::new(AGENT_CHIPS),
            house: Account::new(DEALER_CHIPS),
            deck: Deck::shuffled(&mut rng),
            dealer: Hand::empty(),
            hand: Hand::empty(),
            stage: Stage::PreRound,
            wager: 0,
            rounds: 0,
            rng,
        }
    }
    pub fn with_chips(self, player: Chips, house: Chips) -> Self {
        Self {
            player: Account::new(player),
            house: Account::new(house),
            ..self
        }
    }
    pub fn agent(&self) -> &Agent<S> {
        &self.agent
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn summary(&self) -> Summary {
        Summary::new(
            self.rounds,
            self.agent.record(),
            self.player.balance(),
            self.house.balance(),
        )
    }

    /// Plays until `rounds` more rounds have settled or either side is broke.
    pub fn play(&mut self, rounds: usize) -> Result<()> {
        let target = self.rounds + rounds;
        while !self.is_over(target) {
            self.step()?;
        }
        log::info!("session over after {} rounds", self.rounds);
        Ok(())
    }

    /// Saves everything the agent learned. The game cannot be played afterwards.
    pub fn close(&mut self) -> Result<()> {
        self.agent.save_all()
    }

    fn is_over(&self, target: usize) -> bool {
        self.stage == Stage::PreRound
            && (self.rounds >= target || self.player.is_bankrupt() || self.house.is_bankrupt())
    }

    fn step(&mut self) -> Result<()> {
        match self.stage {
            Stage::PreRound => self.bet(),
            Stage::InRound => self.act(),
            Stage::PostRound => self.settle(),
        }
    }

    fn bet(&mut self) -> Result<()> {
        let discard = self.dealer.clear().into_iter().chain(self.hand.clear());
        self.deck.reshuffle(discard, &mut self.rng);
        self.wager = self.player.withdraw(self.agent.wager(self.player.balance()));
        let state = GameState::from(PreRound::new(self.wager));
        self.observe(state.clone())?;
        self.decide(&state)?;
        for _ in 0..2 {
            let card = self.deal()?;
            self.dealer.add(card);
            let card = self.deal()?;
            self.hand.add(card);
        }
        log::debug!("wager {:>4} dealt {} against {}", self.wager, self.hand, self.dealer);
        self.stage = Stage::InRound;
        Ok(())
    }

    fn act(&mut self) -> Result<()> {
        if self.hand.is_bust() {
            self.stage = Stage::PostRound;
            return Ok(());
        }
        let up = self
            .dealer
            .cards()
            .first()
            .copied()
            .ok_or_else(|| Error::invalid("dealer holds no cards"))?;
        let state = GameState::from(InRound::new(up, self.hand.clone())?);
        self.observe(state.clone())?;
        match self.decide(&state)? {
            Action::Hit => {
                let card = self.deal()?;
                self.hand.add(card);
                log::debug!("hit {} -> {}", card, self.hand);
            }
            _ => {
                while self.dealer.value() < DEALER_STANDS {
                    let card = self.deal()?;
                    self.dealer.add(card);
                }
                self.stage = Stage::PostRound;
            }
        }
        Ok(())
    }

    fn settle(&mut self) -> Result<()> {
        let outcome = showdown(&self.hand, &self.dealer);
        let delta = match outcome {
            Outcome::Win => {
                let paid = self.house.withdraw(self.wager);
                self.player.deposit(self.wager + paid);
                paid
            }
            Outcome::Draw => {
                self.player.deposit(self.wager);
                0
            }
            Outcome::Loss => {
                self.house.deposit(self.wager);
                -self.wager
            }
        };
        log::debug!("{} {} vs {} ({:+})", outcome, self.hand, self.dealer, delta);
        self.wager = 0;
        self.rounds += 1;
        self.stage = Stage::PreRound;
        self.observe(GameState::from(PostRound::new(outcome, delta)))
    }

    fn deal(&mut self) -> Result<Card> {
        self.deck
            .draw()
            .ok_or_else(|| Error::invalid("deck exhausted"))
    }

    fn observe(&mut self, state: GameState) -> Result<()> {
        match self.agent.record_transition(state) {
            Err(e) if e.is_recoverable() => {
                log::warn!("learning without the store: {}", e);
                Ok(())
            }
            other => other,
        }
    }

    /// The agent's choice, or the stage's first action if the store let it down.
    fn decide(&mut self, state: &GameState) -> Result<Action> {
        match self.agent.choose_action(state) {
            Err(e) if e.is_recoverable() => {
                log::warn!("deciding without the store: {}", e);
                Ok(state.stage().actions()[0])
            }
            other => other,
        }
    }
}
