//! Console rendering of a solved arrangement.

use prettytable::{Cell, Row, Table};

use crate::{error::Result, puzzle::simulation::Simulation};

/// Spells out a house position, 0 being the far left.
pub fn ordinal(order: usize) -> &'static str {
    match order {
        0 => "first",
        1 => "second",
        2 => "third",
        3 => "fourth",
        4 => "fifth",
        _ => "unknown",
    }
}

/// Renders the five houses in left-to-right order, one fixed-width row per
/// house: position, colour, then the occupant's four attributes.
pub fn render_arrangement(sim: &Simulation) -> Result<String> {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("House"),
        Cell::new("Color"),
        Cell::new("Nationality"),
        Cell::new("Beverage"),
        Cell::new("Cigar"),
        Cell::new("Pet"),
    ]));

    for order in 0..5 {
        let house = sim.house(sim.house_by_order(order)?);
        let person = sim.person(house.occupant());
        table.add_row(Row::new(vec![
            Cell::new(ordinal(order)),
            Cell::new(&house.color.to_string()),
            Cell::new(&person.nationality.to_string()),
            Cell::new(&person.beverage.to_string()),
            Cell::new(&person.cigar.to_string()),
            Cell::new(&person.pet.to_string()),
        ]));
    }

    Ok(table.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::puzzle::attribute::{Beverage, Cigar, Color, Nationality, Pet};
    use crate::puzzle::simulation::Simulation;

    #[test]
    fn ordinals_cover_the_row() {
        assert_eq!(ordinal(0), "first");
        assert_eq!(ordinal(4), "fifth");
        assert_eq!(ordinal(7), "unknown");
    }

    #[test]
    fn arrangement_lists_houses_left_to_right() {
        use Beverage::*;
        use Cigar::*;
        use Color::*;
        use Nationality::*;
        use Pet::*;
        let sim = Simulation::from_rows([
            (Yellow, Norwegian, Water, Dunhill, Cat),
            (Blue, Danish, Tea, Blend, Horse),
            (Red, British, Milk, PallMall, Bird),
            (Green, German, Coffee, Prince, Fish),
            (White, Swedish, Beer, Bluemaster, Dog),
        ]);

        let rendered = render_arrangement(&sim).unwrap();
        assert!(rendered.contains("first"));
        assert!(rendered.contains("pall mall"));
        assert!(rendered.contains("Norwegian"));

        // Left to right: the yellow house row precedes the white one.
        let yellow_at = rendered.find("yellow").unwrap();
        let white_at = rendered.find("white").unwrap();
        assert!(yellow_at < white_at);
    }
}
