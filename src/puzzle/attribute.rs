//! The fixed attribute pools that seed every random arrangement.
//!
//! Each dimension has exactly five values, and a solved (or freshly
//! generated) arrangement assigns each value to exactly one entity. The
//! `ALL` arrays are the pools the generator permutes.

use std::fmt;

/// The colour a house is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    White,
    Green,
    Yellow,
    Blue,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::White,
        Color::Green,
        Color::Yellow,
        Color::Blue,
    ];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::White => "white",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

/// An occupant's nationality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nationality {
    British,
    Swedish,
    Danish,
    Norwegian,
    German,
}

impl Nationality {
    pub const ALL: [Nationality; 5] = [
        Nationality::British,
        Nationality::Swedish,
        Nationality::Danish,
        Nationality::Norwegian,
        Nationality::German,
    ];
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Nationality::British => "British",
            Nationality::Swedish => "Swedish",
            Nationality::Danish => "Danish",
            Nationality::Norwegian => "Norwegian",
            Nationality::German => "German",
        };
        write!(f, "{}", name)
    }
}

/// What an occupant drinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Beverage {
    Tea,
    Coffee,
    Milk,
    Beer,
    Water,
}

impl Beverage {
    pub const ALL: [Beverage; 5] = [
        Beverage::Tea,
        Beverage::Coffee,
        Beverage::Milk,
        Beverage::Beer,
        Beverage::Water,
    ];
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Beverage::Tea => "tea",
            Beverage::Coffee => "coffee",
            Beverage::Milk => "milk",
            Beverage::Beer => "beer",
            Beverage::Water => "water",
        };
        write!(f, "{}", name)
    }
}

/// The brand an occupant smokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cigar {
    PallMall,
    Bluemaster,
    Prince,
    Blend,
    Dunhill,
}

impl Cigar {
    pub const ALL: [Cigar; 5] = [
        Cigar::PallMall,
        Cigar::Bluemaster,
        Cigar::Prince,
        Cigar::Blend,
        Cigar::Dunhill,
    ];
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cigar::PallMall => "pall mall",
            Cigar::Bluemaster => "bluemaster",
            Cigar::Prince => "prince",
            Cigar::Blend => "blend",
            Cigar::Dunhill => "dunhill",
        };
        write!(f, "{}", name)
    }
}

/// The animal an occupant keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pet {
    Dog,
    Cat,
    Horse,
    Bird,
    Fish,
}

impl Pet {
    pub const ALL: [Pet; 5] = [Pet::Dog, Pet::Cat, Pet::Horse, Pet::Bird, Pet::Fish];
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pet::Dog => "dog",
            Pet::Cat => "cat",
            Pet::Horse => "horse",
            Pet::Bird => "bird",
            Pet::Fish => "fish",
        };
        write!(f, "{}", name)
    }
}

/// A typed value in one of the four person attribute dimensions.
///
/// This is the closed variant that the generic person lookup and the
/// transposition repair are parameterised over. House dimensions (colour,
/// position) never appear here: no repair ever transposes them, and houses
/// have their own lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Nationality(Nationality),
    Beverage(Beverage),
    Cigar(Cigar),
    Pet(Pet),
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Nationality(n) => write!(f, "nationality {}", n),
            Attribute::Beverage(b) => write!(f, "beverage {}", b),
            Attribute::Cigar(c) => write!(f, "cigar {}", c),
            Attribute::Pet(p) => write!(f, "pet {}", p),
        }
    }
}
