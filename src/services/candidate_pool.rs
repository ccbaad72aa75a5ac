//! Candidate titles scored against a favorite movie.

/// Titles evaluated by the recommendation and genre endpoints, in order.
#[rustfmt::skip]
const DEFAULT_TITLES: &[&str] = &[
    "The Shawshank Redemption", "The Godfather", "The Dark Knight", "The Godfather Part II",
    "Pulp Fiction", "Fight Club", "Forrest Gump", "The Lord of the Rings: The Return of the King",
    "The Matrix", "Goodfellas", "Inglourious Basterds", "Interstellar", "The Green Mile",
    "Gladiator", "The Departed", "The Prestige", "Whiplash", "Django Unchained",
    "The Lion King", "Avengers: Endgame", "Memento", "Shutter Island",
    "The Social Network", "Tenet", "Dunkirk", "Catch Me If You Can",
    "Blood Diamond", "The Revenant", "The Wolf of Wall Street", "Titanic",
    "Saving Private Ryan", "Se7en", "The Silence of the Lambs", "The Usual Suspects",
    "Braveheart", "American Beauty", "A Beautiful Mind", "Black Swan",
    "Parasite", "La La Land", "The Big Short", "12 Years a Slave",
    "The Imitation Game", "The Theory of Everything", "No Country for Old Men",
    "There Will Be Blood", "Birdman", "Her", "The Grand Budapest Hotel",
    "Spotlight", "Argo", "The Hurt Locker", "Slumdog Millionaire",
    "Million Dollar Baby", "Mystic River", "The Pianist", "The Truman Show",
    "Eternal Sunshine of the Spotless Mind", "The Sixth Sense", "A Few Good Men",
    "Cast Away", "Apollo 13", "Rain Man", "The Color of Money",
    "Once Upon a Time in Hollywood", "The Irishman", "Marriage Story",
    "Moneyball", "Ocean's Eleven", "Ocean's Twelve", "Ocean's Thirteen",
    "Heat", "Collateral", "Minority Report", "War of the Worlds",
    "Edge of Tomorrow", "Oblivion", "Top Gun: Maverick", "Jerry Maguire",
    "Magnolia", "Boogie Nights", "The Fighter", "American Hustle",
    "Silver Linings Playbook", "Joy", "Unforgiven", "Gran Torino",
    "The Mule", "The Bridges of Madison County", "Batman Begins",
    "The Dark Knight Rises", "Man of Steel", "Justice League",
    "Wonder Woman", "Aquaman", "Black Panther", "Doctor Strange",
    "Iron Man", "Iron Man 2", "Iron Man 3", "Captain America: Civil War",
    "Thor: Ragnarok", "Guardians of the Galaxy", "Guardians of the Galaxy Vol. 2",
];

/// Ordered list of candidate titles
///
/// Pool order only matters as the tie-break when two candidates share a
/// rating: the one met first stays ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    titles: Vec<String>,
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self::new(DEFAULT_TITLES.iter().map(|t| t.to_string()))
    }
}

impl CandidatePool {
    pub fn new(titles: impl IntoIterator<Item = String>) -> Self {
        Self {
            titles: titles.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
