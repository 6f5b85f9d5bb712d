//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays a cassette's interactions, one queue per port/method pair.
///
/// Interactions of different pairs may interleave freely; within a pair
/// they are served in recording order.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
    last_seq: HashMap<(String, String), u64>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self {
            queues,
            last_seq: HashMap::new(),
        }
    }

    /// Take the next interaction for `port::method`.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the pair. A
    /// replay that diverges from its recording is a broken test fixture.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());

        let Some(queue) = self.queues.get_mut(&key) else {
            let pairs = self.queues.keys();
            let mut available: Vec<String> = pairs.map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };

        let Some(interaction) = queue.pop_front() else {
            panic!(
                "Cassette exhausted: all interactions for port={port:?} method={method:?} \
                 have been consumed. Last interaction was seq={}.",
                self.last_seq.get(&key).copied().unwrap_or_default()
            );
        };

        self.last_seq.insert(key, interaction.seq);
        interaction
    }

    /// Number of interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}
