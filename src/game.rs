//! The marble game: players take turns placing marbles in a circle. Most
//! marbles are spliced in one place clockwise of the current one; every
//! twenty-third is kept for points instead, and pulls out the marble seven
//! places counter-clockwise along with it.

use std::str::FromStr;

use failure::Error;

use ring::Ring;

/// Game parameters, as given by the puzzle's one-line description.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rules {
    pub players: usize,
    pub last_marble: usize,
}

impl FromStr for Rules {
    type Err = Error;

    fn from_str(s: &str) -> Result<Rules, Error> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [players, "players;", "last", "marble", "is", "worth", points, "points"] => {
                Ok(Rules {
                    players: players.parse()?,
                    last_marble: points.parse()?,
                })
            }
            _ => Err(format_err!("malformed game description: {:?}", s)),
        }
    }
}

/// One game in progress: the circle of marbles, the score table, and the
/// value the next turn will place.
pub struct Game {
    circle: Ring<usize>,
    scores: Vec<usize>,
    next_marble: usize,
    last_marble: usize,
}

impl Game {
    /// Set up a game with marble 0 already placed. Marbles `1 .. last_marble`
    /// remain to be played.
    pub fn new(players: usize, last_marble: usize) -> Game {
        assert!(players > 0, "the game needs at least one player");
        assert!(last_marble > 0, "the game needs at least marble 0");
        let mut circle = Ring::with_capacity(last_marble);
        circle.insert_after(0);
        Game {
            circle,
            scores: vec![0; players],
            next_marble: 1,
            last_marble,
        }
    }

    pub fn finished(&self) -> bool {
        self.next_marble >= self.last_marble
    }

    /// Take the next turn in the game. Returns the number of points earned.
    pub fn turn(&mut self) -> usize {
        let marble = self.next_marble;
        self.next_marble += 1;

        if marble % 23 == 0 {
            let player = marble % self.scores.len();
            self.circle.step(-7);
            let points = marble + self.circle.remove_current();
            self.scores[player] += points;
            points
        } else {
            self.circle.step(1);
            self.circle.insert_after(marble);
            0
        }
    }

    /// The best accumulated score so far.
    pub fn high_score(&self) -> usize {
        *self.scores.iter().max().unwrap()
    }
}

/// Play a whole game and return the winning score.
pub fn play(players: usize, last_marble: usize) -> usize {
    let mut game = Game::new(players, last_marble);
    while !game.finished() {
        game.turn();
    }
    game.high_score()
}
