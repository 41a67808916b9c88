use super::data::Data;
use super::game::Game;
use super::game::Status;
use super::tree::Tree;
use crate::MAX_ROLLOUT_STEPS;
use crate::Position;
use crate::Utility;
use petgraph::graph::NodeIndex;
use rand::prelude::*;

/// Single-observer information-set Monte Carlo tree search.
///
/// Every iteration samples a fresh determinization of the root for the
/// acting player, then descends one shared tree of choice keys:
///
/// 1. expand: offer every legal choice, growing one new child
///    (every new child, at the root)
/// 2. select: UCB1 among children legal in this determinization
/// 3. rollout: biased random playout from a newly reached child
/// 4. backpropagate: each node accumulates the score of the
///    player who chose into it
///
/// The tree lives for exactly one call to [`Search::run`].
pub struct Search<G: Game> {
    tree: Tree<G::Choice, G::Key>,
    rng: SmallRng,
    iterations: usize,
}

impl<G: Game> Search<G> {
    pub fn new(iterations: usize) -> Self {
        Self {
            tree: Tree::empty(),
            rng: SmallRng::from_os_rng(),
            iterations,
        }
    }
    /// reproducible search, given a reproducible game
    pub fn seeded(iterations: usize, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..Self::new(iterations)
        }
    }
    pub fn tree(&self) -> &Tree<G::Choice, G::Key> {
        &self.tree
    }

    /// the most visited choice at the root of `game`.
    pub fn run(&mut self, game: &mut G) -> anyhow::Result<G::Choice> {
        let player = match game.status() {
            Status::Awaiting(player) => player,
            Status::Terminated(scores) => {
                anyhow::bail!("search requires a pending decision, game ended with {:?}", scores)
            }
        };
        self.tree = Tree::empty();
        let root = self.tree.insert(Data::root(player));
        for _ in 0..self.iterations {
            let ref mut world = game.determinize(player);
            self.simulate(root, world);
        }
        log::debug!(
            "searched {} iterations for player {} over {} nodes",
            self.iterations,
            player,
            self.tree.size()
        );
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("\n{}", self.tree);
        }
        match self.best(root) {
            Some(choice) => Ok(choice),
            None => {
                log::debug!("root never expanded, choosing uniformly");
                game.choices()
                    .choose(&mut self.rng)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("player {} has no legal choices", player))
            }
        }
    }

    fn simulate(&mut self, node: NodeIndex, game: &mut G) -> Vec<Utility> {
        let actor = match game.status() {
            Status::Awaiting(actor) => actor,
            Status::Terminated(scores) => {
                self.tree.at_mut(node).record(&scores);
                return scores;
            }
        };
        let root = node == self.tree.root();
        if !root || self.tree.children(node).is_empty() {
            self.expand(node, actor, game);
        }
        let Some(child) = self.select(node, game) else {
            self.tree.at_mut(node).record(&[]);
            return Vec::new();
        };
        let choice = self
            .tree
            .at(child)
            .choice()
            .cloned()
            .expect("non-root nodes carry a choice");
        game.apply(&choice);
        let scores = match self.tree.at(child).visits() {
            0 => {
                let scores = Self::rollout(game);
                self.tree.at_mut(child).record(&scores);
                scores
            }
            _ => self.simulate(child, game),
        };
        self.tree.at_mut(node).record(&scores);
        scores
    }

    /// count every legal choice as offered, and grow the tree:
    /// the root takes every choice, inner nodes take one new choice per visit.
    fn expand(&mut self, node: NodeIndex, actor: Position, game: &G) {
        let root = node == self.tree.root();
        let mut choices = game.choices();
        choices.shuffle(&mut self.rng);
        let mut grown = false;
        for choice in choices {
            let key = game.key(&choice);
            self.tree.at_mut(node).offer(key.clone());
            if (root || !grown) && self.tree.follow(node, &key).is_none() {
                self.tree.attach(node, key, Data::child(actor, choice));
                grown = true;
            }
        }
    }

    /// highest UCB1 among children legal in this determinization.
    /// at the root every child competes for the root's visits; below it,
    /// each child is measured against how often its choice was offered.
    fn select(&self, node: NodeIndex, game: &G) -> Option<NodeIndex> {
        let parent = self.tree.at(node);
        let root = node == self.tree.root();
        let mut best = None;
        let mut value = Utility::NEG_INFINITY;
        for (child, key) in self.tree.children(node) {
            let data = self.tree.at(child);
            let choice = data.choice().expect("non-root nodes carry a choice");
            if !game.available(choice) {
                continue;
            }
            let total = match root {
                true => parent.visits(),
                false => parent.offers(key).unwrap_or(parent.visits()),
            };
            let ucb = data.ucb(total);
            if ucb > value {
                value = ucb;
                best = Some(child);
            }
        }
        best
    }

    /// most visited root child, earliest inserted on ties
    fn best(&self, root: NodeIndex) -> Option<G::Choice> {
        self.tree
            .children(root)
            .into_iter()
            .map(|(child, _)| child)
            .fold(None, |best: Option<NodeIndex>, child| match best {
                Some(best) if self.tree.at(best).visits() >= self.tree.at(child).visits() => {
                    Some(best)
                }
                _ => Some(child),
            })
            .and_then(|child| self.tree.at(child).choice().cloned())
    }

    /// play out with the game's own rollout policy. games that do not
    /// finish within the step budget score nothing for anyone.
    fn rollout(game: &mut G) -> Vec<Utility> {
        for _ in 0..MAX_ROLLOUT_STEPS {
            if let Status::Terminated(scores) = game.status() {
                return scores;
            }
            let choice = game.rollout();
            game.apply(&choice);
        }
        match game.status() {
            Status::Terminated(scores) => scores,
            Status::Awaiting(_) => {
                log::trace!("rollout exceeded {} steps", MAX_ROLLOUT_STEPS);
                Vec::new()
            }
        }
    }
}

/// Search `game` for `iterations` simulations and return the choice
/// the acting player should make.
pub fn ismcts<G: Game>(game: &mut G, iterations: usize) -> anyhow::Result<G::Choice> {
    Search::new(iterations).run(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// one decision: pick a number, the higher the better for player 0.
    /// masked games hide a random subset of the numbers in each
    /// determinization, which exercises availability.
    #[derive(Debug, Clone)]
    struct Pick {
        picked: Option<u8>,
        hidden: Vec<u8>,
        mask: f64,
        rng: SmallRng,
    }

    impl Pick {
        fn new(seed: u64) -> Self {
            Self {
                picked: None,
                hidden: Vec::new(),
                mask: 0.,
                rng: SmallRng::seed_from_u64(seed),
            }
        }
        fn masked(seed: u64) -> Self {
            Self {
                mask: 0.3,
                ..Self::new(seed)
            }
        }
    }

    impl Game for Pick {
        type Choice = u8;
        type Key = u8;
        fn choices(&self) -> Vec<u8> {
            (0..5).filter(|n| !self.hidden.contains(n)).collect()
        }
        fn apply(&mut self, choice: &u8) {
            assert!(self.available(choice));
            self.picked = Some(*choice);
        }
        fn status(&self) -> Status {
            match self.picked {
                None => Status::Awaiting(0),
                Some(n) => Status::Terminated(vec![n as Utility / 4., 1. - n as Utility / 4.]),
            }
        }
        fn determinize(&mut self, _: Position) -> Self {
            let hidden = (0..5).filter(|_| self.rng.random_bool(self.mask)).collect();
            Self {
                picked: self.picked,
                hidden,
                mask: self.mask,
                rng: SmallRng::from_rng(&mut self.rng),
            }
        }
        fn available(&self, choice: &u8) -> bool {
            self.choices().contains(choice)
        }
        fn rollout(&mut self) -> u8 {
            *self.choices().choose(&mut self.rng).expect("some choice")
        }
        fn key(&self, choice: &u8) -> u8 {
            *choice
        }
    }

    /// a finished game
    #[derive(Debug, Clone)]
    struct Over;

    impl Game for Over {
        type Choice = ();
        type Key = ();
        fn choices(&self) -> Vec<()> {
            vec![]
        }
        fn apply(&mut self, _: &()) {}
        fn status(&self) -> Status {
            Status::Terminated(vec![1.])
        }
        fn determinize(&mut self, _: Position) -> Self {
            Over
        }
        fn available(&self, _: &()) -> bool {
            false
        }
        fn rollout(&mut self) {}
        fn key(&self, _: &()) {}
    }

    #[test]
    fn finds_best_pick() {
        let ref mut game = Pick::new(0);
        let choice = Search::seeded(500, 0).run(game).unwrap();
        assert!(choice == 4);
    }

    #[test]
    fn terminal_root_is_error() {
        assert!(Search::seeded(10, 0).run(&mut Over).is_err());
        assert!(ismcts(&mut Over, 0).is_err());
    }

    #[test]
    fn zero_iterations_still_legal() {
        for seed in 0..16 {
            let ref mut game = Pick::masked(seed);
            let choice = Search::seeded(0, seed).run(game).unwrap();
            assert!(game.choices().contains(&choice));
        }
    }

    /// iterations in which none of the root's children is legal.
    /// the root expands from the first determinization offering anything,
    /// and replaying the same determinizations finds the dead ends.
    fn stranded(seed: u64, iterations: usize) -> usize {
        let mut replay = Pick::masked(seed);
        let mut expanded: Option<Vec<u8>> = None;
        let mut stranded = 0;
        for _ in 0..iterations {
            let world = replay.determinize(0);
            let choices = world.choices();
            if expanded.is_none() && !choices.is_empty() {
                expanded = Some(choices.clone());
            }
            if !expanded.iter().flatten().any(|c| choices.contains(c)) {
                stranded += 1;
            }
        }
        stranded
    }

    #[test]
    fn every_iteration_visits_root() {
        for seed in 0..8 {
            let ref mut game = Pick::masked(seed);
            let mut search = Search::seeded(200, seed);
            search.run(game).unwrap();
            let tree = search.tree();
            let root = tree.root();
            let children = tree
                .children(root)
                .into_iter()
                .map(|(child, _)| tree.at(child).visits())
                .sum::<usize>();
            let stranded = stranded(seed, 200);
            assert!(tree.at(root).visits() == 200);
            assert!(children == 200 - stranded);
            assert!(tree.at(root).visits() - children == stranded);
            assert!(tree.children(root).len() <= 5);
        }
    }

    #[test]
    fn masked_choices_stay_legal() {
        for seed in 0..8 {
            let ref mut game = Pick::masked(seed);
            let choice = Search::seeded(100, seed).run(game).unwrap();
            assert!(game.choices().contains(&choice));
        }
    }

    #[test]
    fn seeded_search_is_reproducible() {
        let a = Search::seeded(64, 9).run(&mut Pick::masked(3)).unwrap();
        let b = Search::seeded(64, 9).run(&mut Pick::masked(3)).unwrap();
        assert!(a == b);
    }
}
