//! Memory game rules: every character is dealt twice, face down, and the
//! player reveals two cards per move looking for pairs.

use client::Character;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Hidden,
    Revealed,
    Matched,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub character: Character,
    pub face: Face,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Card out of range, already face up, or a mismatch is still showing.
    Ignored,
    /// First card of a move.
    First,
    Matched,
    /// Two different cards are face up until `hide_mismatched` is called.
    Mismatched,
    /// The last pair was matched.
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub pairs: usize,
    pub moves: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    cards: Vec<Card>,
    /// Indices of face-up cards that are not matched yet.
    revealed: Vec<usize>,
    moves: u32,
}

impl Board {
    /// Two cards per character, shuffled.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R, characters: &[Character]) -> Self {
        let mut cards: Vec<Card> = characters
            .iter()
            .flat_map(|character| {
                let card = Card {
                    character: character.clone(),
                    face: Face::Hidden,
                };
                [card.clone(), card]
            })
            .collect();
        cards.shuffle(rng);

        Self {
            cards,
            revealed: Vec::with_capacity(2),
            moves: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// A mismatched pair is face up and must be hidden before the next move.
    pub fn is_waiting(&self) -> bool {
        self.revealed.len() == 2
    }

    pub fn is_won(&self) -> bool {
        !self.cards.is_empty()
            && self.cards.iter().all(|card| card.face == Face::Matched)
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.is_waiting() {
            return FlipOutcome::Ignored;
        }
        match self.cards.get_mut(index) {
            Some(card) if card.face == Face::Hidden => {
                card.face = Face::Revealed
            }
            _ => return FlipOutcome::Ignored,
        }
        self.revealed.push(index);

        let &[first, second] = self.revealed.as_slice() else {
            return FlipOutcome::First;
        };
        self.moves += 1;

        if self.cards[first].character.id != self.cards[second].character.id {
            return FlipOutcome::Mismatched;
        }

        self.cards[first].face = Face::Matched;
        self.cards[second].face = Face::Matched;
        self.revealed.clear();
        if self.is_won() {
            FlipOutcome::Won
        } else {
            FlipOutcome::Matched
        }
    }

    /// Turn a mismatched pair face down again.
    pub fn hide_mismatched(&mut self) {
        for index in self.revealed.drain(..) {
            self.cards[index].face = Face::Hidden;
        }
    }

    pub fn result(&self) -> GameResult {
        GameResult {
            pairs: self.pairs(),
            moves: self.moves,
        }
    }
}
