use crate::codex::Codex;
use crate::error::Result;
use crate::seed::Seed;
use rand::Rng;

/// Draws code words from a [`Codex`].
///
/// Every draw reseeds its own generator from the [`Seed`]. With a fixed seed
/// this means a repeated index always yields the same word, and categories of
/// equal length yield the word at the same position.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    codex: &'a Codex,
    seed: Seed,
}

impl<'a> Generator<'a> {
    pub fn new(codex: &'a Codex, seed: Seed) -> Self {
        Self { codex, seed }
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Pick one word from category `index`.
    pub fn draw(&self, index: i64) -> Result<&'a str> {
        let codex: &'a Codex = self.codex;
        let category = codex.category(index)?;
        // Item lists always hold at least two pieces, one on each side of a comma.
        let pick = self.seed.rng().random_range(0..category.items.len());
        Ok(&category.items[pick])
    }

    /// Draw one word per index, in order, stopping at the first invalid index.
    pub fn generate(&self, indices: &[i64]) -> Result<Vec<&'a str>> {
        indices.iter().map(|&index| self.draw(index)).collect()
    }
}
