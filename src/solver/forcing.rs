//! The deterministic forcing pass.
//!
//! Ten of the fifteen clues bind one attribute value to a person who is
//! already identifiable by another unique attribute (or by a house colour
//! or position). Each such clue admits a direct repair: a single occupancy
//! swap or attribute transposition that establishes the clue on the spot.
//! The pass runs the ten repairs in a fixed order; rules that share an
//! attribute dimension are ordered so their placements are compatible, and
//! the order must not be changed.

use crate::{
    error::Result,
    puzzle::{
        attribute::{Attribute, Beverage, Cigar, Color, Nationality, Pet},
        simulation::Simulation,
    },
};

/// One forced clue and its repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForcingRule {
    BritInRedHouse,
    SwedeKeepsDogs,
    DaneDrinksTea,
    GreenHouseCoffee,
    PallMallBirds,
    YellowHouseDunhill,
    CentreHouseMilk,
    FirstHouseNorwegian,
    BluemasterBeer,
    GermanSmokesPrince,
}

impl ForcingRule {
    /// Every forced clue, in application order. The order is load-bearing:
    /// a later rule on the same attribute dimension must not displace what
    /// an earlier one placed.
    pub const ALL: [ForcingRule; 10] = [
        ForcingRule::BritInRedHouse,
        ForcingRule::SwedeKeepsDogs,
        ForcingRule::DaneDrinksTea,
        ForcingRule::GreenHouseCoffee,
        ForcingRule::PallMallBirds,
        ForcingRule::YellowHouseDunhill,
        ForcingRule::CentreHouseMilk,
        ForcingRule::FirstHouseNorwegian,
        ForcingRule::BluemasterBeer,
        ForcingRule::GermanSmokesPrince,
    ];

    /// The clue in words.
    pub fn description(&self) -> &'static str {
        match self {
            ForcingRule::BritInRedHouse => "the Brit lives in the red house",
            ForcingRule::SwedeKeepsDogs => "the Swede keeps dogs as pets",
            ForcingRule::DaneDrinksTea => "the Dane drinks tea",
            ForcingRule::GreenHouseCoffee => "the green house's owner drinks coffee",
            ForcingRule::PallMallBirds => "the person who smokes Pall Mall rears birds",
            ForcingRule::YellowHouseDunhill => "the owner of the yellow house smokes Dunhill",
            ForcingRule::CentreHouseMilk => "the man living in the centre house drinks milk",
            ForcingRule::FirstHouseNorwegian => "the Norwegian lives in the first house",
            ForcingRule::BluemasterBeer => "the owner who smokes BlueMaster drinks beer",
            ForcingRule::GermanSmokesPrince => "the German smokes Prince",
        }
    }

    /// Repairs the arrangement so this clue holds.
    ///
    /// Already-satisfied clues are left untouched: the occupancy swap is
    /// guarded, and attribute transpositions are no-ops on their holder.
    pub fn apply(&self, sim: &mut Simulation) -> Result<()> {
        match self {
            ForcingRule::BritInRedHouse => {
                let brit = sim.person_by_nationality(Nationality::British)?;
                let resident = sim.person_by_house_color(Color::Red)?;
                if brit != resident {
                    sim.swap_occupants(brit, resident);
                }
            }
            ForcingRule::SwedeKeepsDogs => {
                let swede = sim.person_by_nationality(Nationality::Swedish)?;
                sim.reassign_attribute(swede, Attribute::Pet(Pet::Dog))?;
            }
            ForcingRule::DaneDrinksTea => {
                let dane = sim.person_by_nationality(Nationality::Danish)?;
                sim.reassign_attribute(dane, Attribute::Beverage(Beverage::Tea))?;
            }
            ForcingRule::GreenHouseCoffee => {
                let resident = sim.person_by_house_color(Color::Green)?;
                sim.reassign_attribute(resident, Attribute::Beverage(Beverage::Coffee))?;
            }
            ForcingRule::PallMallBirds => {
                let smoker = sim.person_by_cigar(Cigar::PallMall)?;
                sim.reassign_attribute(smoker, Attribute::Pet(Pet::Bird))?;
            }
            ForcingRule::YellowHouseDunhill => {
                let resident = sim.person_by_house_color(Color::Yellow)?;
                sim.reassign_attribute(resident, Attribute::Cigar(Cigar::Dunhill))?;
            }
            ForcingRule::CentreHouseMilk => {
                let house = sim.house_by_order(2)?;
                let resident = sim.house(house).occupant();
                sim.reassign_attribute(resident, Attribute::Beverage(Beverage::Milk))?;
            }
            ForcingRule::FirstHouseNorwegian => {
                let house = sim.house_by_order(0)?;
                let resident = sim.house(house).occupant();
                sim.reassign_attribute(resident, Attribute::Nationality(Nationality::Norwegian))?;
            }
            ForcingRule::BluemasterBeer => {
                let smoker = sim.person_by_cigar(Cigar::Bluemaster)?;
                sim.reassign_attribute(smoker, Attribute::Beverage(Beverage::Beer))?;
            }
            ForcingRule::GermanSmokesPrince => {
                let german = sim.person_by_nationality(Nationality::German)?;
                sim.reassign_attribute(german, Attribute::Cigar(Cigar::Prince))?;
            }
        }
        Ok(())
    }

    /// The clue as a predicate over the current arrangement.
    pub fn holds(&self, sim: &Simulation) -> Result<bool> {
        let holds = match self {
            ForcingRule::BritInRedHouse => {
                let brit = sim.person_by_nationality(Nationality::British)?;
                sim.house(sim.person(brit).house()).color == Color::Red
            }
            ForcingRule::SwedeKeepsDogs => {
                let swede = sim.person_by_nationality(Nationality::Swedish)?;
                sim.person(swede).pet == Pet::Dog
            }
            ForcingRule::DaneDrinksTea => {
                let dane = sim.person_by_nationality(Nationality::Danish)?;
                sim.person(dane).beverage == Beverage::Tea
            }
            ForcingRule::GreenHouseCoffee => {
                let resident = sim.person_by_house_color(Color::Green)?;
                sim.person(resident).beverage == Beverage::Coffee
            }
            ForcingRule::PallMallBirds => {
                let smoker = sim.person_by_cigar(Cigar::PallMall)?;
                sim.person(smoker).pet == Pet::Bird
            }
            ForcingRule::YellowHouseDunhill => {
                let resident = sim.person_by_house_color(Color::Yellow)?;
                sim.person(resident).cigar == Cigar::Dunhill
            }
            ForcingRule::CentreHouseMilk => {
                let house = sim.house_by_order(2)?;
                sim.person(sim.house(house).occupant()).beverage == Beverage::Milk
            }
            ForcingRule::FirstHouseNorwegian => {
                let house = sim.house_by_order(0)?;
                sim.person(sim.house(house).occupant()).nationality == Nationality::Norwegian
            }
            ForcingRule::BluemasterBeer => {
                let smoker = sim.person_by_cigar(Cigar::Bluemaster)?;
                sim.person(smoker).beverage == Beverage::Beer
            }
            ForcingRule::GermanSmokesPrince => {
                let german = sim.person_by_nationality(Nationality::German)?;
                sim.person(german).cigar == Cigar::Prince
            }
        };
        Ok(holds)
    }
}

/// Runs every forcing rule, in order, against the arrangement.
pub fn apply_rules(sim: &mut Simulation) -> Result<()> {
    for rule in ForcingRule::ALL {
        rule.apply(sim)?;
    }
    Ok(())
}
