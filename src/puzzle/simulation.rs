//! The puzzle state for a single attempt.
//!
//! A [`Simulation`] owns the five houses and five people of one randomised
//! arrangement and exposes the lookups and repair primitives the solver
//! works through. Every attempt builds a fresh `Simulation`; repairs mutate
//! records in place and never create or destroy them.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    error::{PuzzleError, Result},
    puzzle::{
        attribute::{Attribute, Beverage, Cigar, Color, Nationality, Pet},
        entity::{House, HouseId, Person, PersonId},
    },
};

/// One full arrangement of houses and occupants.
///
/// Two invariants hold at every observable point:
///
/// - **Bidirectional link**: `houses[h].occupant == p` iff
///   `people[p].house == h`. The only code that writes either side is
///   [`Simulation::place_person`], which writes both.
/// - **Uniqueness**: each attribute dimension (colour, order, nationality,
///   beverage, cigar, pet) is a bijection between the five entities and its
///   five values. Generation deals each pool out once, and the only
///   attribute mutation is [`Simulation::reassign_attribute`], a
///   transposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    houses: Vec<House>,
    people: Vec<Person>,
}

/// Returns a copy of the pool in a random order.
fn shuffled<T: Copy, R: Rng>(pool: [T; 5], rng: &mut R) -> [T; 5] {
    let mut pool = pool;
    pool.shuffle(rng);
    pool
}

impl Simulation {
    /// Generates a fresh random arrangement.
    ///
    /// Each attribute pool is permuted independently and dealt out by
    /// index, then people are assigned to houses in a random order.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let colors = shuffled(Color::ALL, rng);
        let orders = shuffled([0, 1, 2, 3, 4], rng);
        let nationalities = shuffled(Nationality::ALL, rng);
        let beverages = shuffled(Beverage::ALL, rng);
        let cigars = shuffled(Cigar::ALL, rng);
        let pets = shuffled(Pet::ALL, rng);

        let houses = (0..5)
            .map(|i| House {
                color: colors[i],
                order: orders[i],
                // Overwritten by place_person below.
                occupant: 0,
            })
            .collect();
        let people = (0..5)
            .map(|i| Person {
                nationality: nationalities[i],
                beverage: beverages[i],
                cigar: cigars[i],
                pet: pets[i],
                house: 0,
            })
            .collect();

        let mut sim = Self { houses, people };
        let assignment = shuffled([0, 1, 2, 3, 4], rng);
        for (house, person) in assignment.into_iter().enumerate() {
            sim.place_person(person, house);
        }
        sim
    }

    /// Builds the arrangement described row by row, with row `i` placed at
    /// position `i` and occupied by person `i`.
    ///
    /// Useful for embedding a fixed arrangement, e.g. a known solution.
    pub fn from_rows(rows: [(Color, Nationality, Beverage, Cigar, Pet); 5]) -> Self {
        let houses = rows
            .iter()
            .enumerate()
            .map(|(i, &(color, ..))| House {
                color,
                order: i,
                occupant: i,
            })
            .collect();
        let people = rows
            .iter()
            .enumerate()
            .map(|(i, &(_, nationality, beverage, cigar, pet))| Person {
                nationality,
                beverage,
                cigar,
                pet,
                house: i,
            })
            .collect();
        Self { houses, people }
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn house(&self, id: HouseId) -> &House {
        &self.houses[id]
    }

    pub fn person(&self, id: PersonId) -> &Person {
        &self.people[id]
    }

    /// The unique person holding the given attribute value.
    ///
    /// A miss means the uniqueness invariant was broken by a bug upstream;
    /// the returned error is fatal, not a retriable condition.
    pub fn person_by_attribute(&self, attribute: Attribute) -> Result<PersonId> {
        let position = match attribute {
            Attribute::Nationality(n) => self.people.iter().position(|p| p.nationality == n),
            Attribute::Beverage(b) => self.people.iter().position(|p| p.beverage == b),
            Attribute::Cigar(c) => self.people.iter().position(|p| p.cigar == c),
            Attribute::Pet(p) => self.people.iter().position(|q| q.pet == p),
        };
        Ok(position.ok_or(PuzzleError::PersonNotFound(attribute))?)
    }

    pub fn person_by_nationality(&self, nationality: Nationality) -> Result<PersonId> {
        self.person_by_attribute(Attribute::Nationality(nationality))
    }

    pub fn person_by_beverage(&self, beverage: Beverage) -> Result<PersonId> {
        self.person_by_attribute(Attribute::Beverage(beverage))
    }

    pub fn person_by_cigar(&self, cigar: Cigar) -> Result<PersonId> {
        self.person_by_attribute(Attribute::Cigar(cigar))
    }

    pub fn person_by_pet(&self, pet: Pet) -> Result<PersonId> {
        self.person_by_attribute(Attribute::Pet(pet))
    }

    pub fn house_by_color(&self, color: Color) -> Result<HouseId> {
        Ok(self
            .houses
            .iter()
            .position(|h| h.color == color)
            .ok_or(PuzzleError::HouseColorNotFound(color))?)
    }

    pub fn house_by_order(&self, order: usize) -> Result<HouseId> {
        Ok(self
            .houses
            .iter()
            .position(|h| h.order == order)
            .ok_or(PuzzleError::HouseOrderNotFound(order))?)
    }

    /// The occupant of the house painted the given colour.
    pub fn person_by_house_color(&self, color: Color) -> Result<PersonId> {
        let house = self.house_by_color(color)?;
        Ok(self.houses[house].occupant)
    }

    /// The single primitive occupancy mutator: moves `person` into `house`,
    /// writing both sides of the link before returning.
    fn place_person(&mut self, person: PersonId, house: HouseId) {
        self.houses[house].occupant = person;
        self.people[person].house = house;
    }

    /// Exchanges the houses of two people.
    pub fn swap_occupants(&mut self, a: PersonId, b: PersonId) {
        let house_a = self.people[a].house;
        let house_b = self.people[b].house;
        self.place_person(a, house_b);
        self.place_person(b, house_a);
    }

    /// The core repair primitive: gives `person` the requested attribute
    /// value by transposing it with the person currently holding it.
    ///
    /// The displaced person receives the value `person` vacates, so the
    /// dimension stays a bijection. When `person` already holds the value
    /// this is a no-op.
    pub fn reassign_attribute(&mut self, person: PersonId, attribute: Attribute) -> Result<()> {
        let holder = self.person_by_attribute(attribute)?;
        if holder == person {
            return Ok(());
        }
        match attribute {
            Attribute::Nationality(value) => {
                self.people[holder].nationality = self.people[person].nationality;
                self.people[person].nationality = value;
            }
            Attribute::Beverage(value) => {
                self.people[holder].beverage = self.people[person].beverage;
                self.people[person].beverage = value;
            }
            Attribute::Cigar(value) => {
                self.people[holder].cigar = self.people[person].cigar;
                self.people[person].cigar = value;
            }
            Attribute::Pet(value) => {
                self.people[holder].pet = self.people[person].pet;
                self.people[person].pet = value;
            }
        }
        Ok(())
    }
}
