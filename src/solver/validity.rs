//! The validity predicate over the five relational clues.
//!
//! These are the clues the forcing pass cannot repair directly: each one
//! relates the positions of two entities instead of binding a value to an
//! identifiable person. They are only ever checked, never repaired; an
//! arrangement that fails any of them is thrown away wholesale.

use crate::{
    error::Result,
    puzzle::{
        attribute::{Beverage, Cigar, Color, Nationality, Pet},
        simulation::Simulation,
    },
};

/// One relational clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckedClue {
    GreenLeftOfWhite,
    BlendNextToCats,
    HorsesNextToDunhill,
    NorwegianNextToBlue,
    BlendNextToWater,
}

impl CheckedClue {
    /// Every checked clue. Evaluation order only decides which failure is
    /// reported first; the conjunction is order-independent.
    pub const ALL: [CheckedClue; 5] = [
        CheckedClue::GreenLeftOfWhite,
        CheckedClue::BlendNextToCats,
        CheckedClue::HorsesNextToDunhill,
        CheckedClue::NorwegianNextToBlue,
        CheckedClue::BlendNextToWater,
    ];

    /// The clue in words.
    pub fn description(&self) -> &'static str {
        match self {
            CheckedClue::GreenLeftOfWhite => "the green house is on the left of the white house",
            CheckedClue::BlendNextToCats => {
                "the man who smokes blends lives next to the one who keeps cats"
            }
            CheckedClue::HorsesNextToDunhill => {
                "the man who keeps horses lives next to the man who smokes Dunhill"
            }
            CheckedClue::NorwegianNextToBlue => "the Norwegian lives next to the blue house",
            CheckedClue::BlendNextToWater => {
                "the man who smokes blend has a neighbour who drinks water"
            }
        }
    }

    /// Whether the clue holds in the given arrangement. Pure: same state,
    /// same answer.
    pub fn holds(&self, sim: &Simulation) -> Result<bool> {
        let order_of_person = |id: usize| sim.house(sim.person(id).house()).order;
        let holds = match self {
            CheckedClue::GreenLeftOfWhite => {
                let green = sim.house(sim.house_by_color(Color::Green)?).order;
                let white = sim.house(sim.house_by_color(Color::White)?).order;
                green + 1 == white
            }
            CheckedClue::BlendNextToCats => {
                let blend = order_of_person(sim.person_by_cigar(Cigar::Blend)?);
                let cats = order_of_person(sim.person_by_pet(Pet::Cat)?);
                blend.abs_diff(cats) == 1
            }
            CheckedClue::HorsesNextToDunhill => {
                let horses = order_of_person(sim.person_by_pet(Pet::Horse)?);
                let dunhill = order_of_person(sim.person_by_cigar(Cigar::Dunhill)?);
                horses.abs_diff(dunhill) == 1
            }
            CheckedClue::NorwegianNextToBlue => {
                let norwegian =
                    order_of_person(sim.person_by_nationality(Nationality::Norwegian)?);
                let blue = sim.house(sim.house_by_color(Color::Blue)?).order;
                norwegian.abs_diff(blue) == 1
            }
            CheckedClue::BlendNextToWater => {
                let blend = order_of_person(sim.person_by_cigar(Cigar::Blend)?);
                let water = order_of_person(sim.person_by_beverage(Beverage::Water)?);
                blend.abs_diff(water) == 1
            }
        };
        Ok(holds)
    }
}

/// The first clue that does not hold, in [`CheckedClue::ALL`] order.
pub fn first_failure(sim: &Simulation) -> Result<Option<CheckedClue>> {
    for clue in CheckedClue::ALL {
        if !clue.holds(sim)? {
            return Ok(Some(clue));
        }
    }
    Ok(None)
}

/// True iff every checked clue holds.
pub fn is_valid(sim: &Simulation) -> Result<bool> {
    Ok(first_failure(sim)?.is_none())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::puzzle::attribute::Attribute;
    use crate::solver::forcing::ForcingRule;

    fn canonical() -> Simulation {
        use crate::puzzle::attribute::{Beverage::*, Cigar::*, Color::*, Nationality::*, Pet::*};
        Simulation::from_rows([
            (Yellow, Norwegian, Water, Dunhill, Cat),
            (Blue, Danish, Tea, Blend, Horse),
            (Red, British, Milk, PallMall, Bird),
            (Green, German, Coffee, Prince, Fish),
            (White, Swedish, Beer, Bluemaster, Dog),
        ])
    }

    #[test]
    fn the_textbook_solution_is_valid() {
        let sim = canonical();
        assert!(is_valid(&sim).unwrap());
        assert_eq!(first_failure(&sim).unwrap(), None);
    }

    #[test]
    fn validity_is_deterministic() {
        let sim = canonical();
        assert_eq!(is_valid(&sim).unwrap(), is_valid(&sim).unwrap());
    }

    #[test]
    fn only_the_five_relational_clues_are_inspected() {
        // Swapping the Dane's and German's beverages breaks a forced clue
        // but touches none of the relational ones, so validity must still
        // pass.
        let mut sim = canonical();
        let german = sim
            .person_by_nationality(crate::puzzle::attribute::Nationality::German)
            .unwrap();
        sim.reassign_attribute(
            german,
            Attribute::Beverage(crate::puzzle::attribute::Beverage::Tea),
        )
        .unwrap();

        assert!(!ForcingRule::DaneDrinksTea.holds(&sim).unwrap());
        assert!(is_valid(&sim).unwrap());
    }

    #[test]
    fn a_misplaced_white_house_fails_the_first_check() {
        use crate::puzzle::attribute::{Beverage::*, Cigar::*, Color::*, Nationality::*, Pet::*};
        // Same occupants, but white is now two to the right of green.
        let sim = Simulation::from_rows([
            (Yellow, Norwegian, Water, Dunhill, Cat),
            (Blue, Danish, Tea, Blend, Horse),
            (Green, British, Milk, PallMall, Bird),
            (Red, German, Coffee, Prince, Fish),
            (White, Swedish, Beer, Bluemaster, Dog),
        ]);

        assert!(!is_valid(&sim).unwrap());
        assert_eq!(
            first_failure(&sim).unwrap(),
            Some(CheckedClue::GreenLeftOfWhite)
        );
    }

    #[test]
    fn adjacency_is_symmetric() {
        use crate::puzzle::attribute::{Beverage::*, Cigar::*, Color::*, Nationality::*, Pet::*};
        // Mirror image of the textbook solution: every neighbour relation
        // still holds, but green is now right of white.
        let sim = Simulation::from_rows([
            (White, Swedish, Beer, Bluemaster, Dog),
            (Green, German, Coffee, Prince, Fish),
            (Red, British, Milk, PallMall, Bird),
            (Blue, Danish, Tea, Blend, Horse),
            (Yellow, Norwegian, Water, Dunhill, Cat),
        ]);

        for clue in [
            CheckedClue::BlendNextToCats,
            CheckedClue::HorsesNextToDunhill,
            CheckedClue::NorwegianNextToBlue,
            CheckedClue::BlendNextToWater,
        ] {
            assert!(clue.holds(&sim).unwrap(), "{}", clue.description());
        }
        assert_eq!(
            first_failure(&sim).unwrap(),
            Some(CheckedClue::GreenLeftOfWhite)
        );
    }
}
