use crate::domain::model::{Assignment, Person, PlaceableGrid, Tier};
use crate::utils::error::{Result, SeatingError};
use rand::seq::SliceRandom;
use rand::Rng;

/// A uniformly shuffled view of `people`.
pub fn shuffled<'a, R: Rng + ?Sized>(people: &'a [Person], rng: &mut R) -> Vec<&'a Person> {
    let mut order: Vec<&Person> = people.iter().collect();
    order.shuffle(rng);
    order
}

pub fn check_capacity(people: usize, grid: &PlaceableGrid) -> Result<()> {
    let seats = grid.seat_count();
    if people > seats {
        return Err(SeatingError::CapacityError { people, seats });
    }
    Ok(())
}

/// Seats `people`, in the order given, on a uniformly random selection of the
/// grid's placeable cells. Unused seats stay blank.
pub fn place<'a, R: Rng + ?Sized>(
    people: &[&'a Person],
    grid: &PlaceableGrid,
    rng: &mut R,
) -> Result<Assignment<'a>> {
    check_capacity(people.len(), grid)?;

    let mut seats = grid.seats();
    seats.shuffle(rng);

    let mut assignment = Assignment::blank(grid);
    for (&person, &pos) in people.iter().zip(seats.iter()) {
        assignment.seat(pos, person);
    }

    tracing::debug!(
        "Placed {} people on {} seats",
        people.len(),
        grid.seat_count()
    );
    Ok(assignment)
}

/// Groups people into desk tiers in order. An odd roster puts its first person
/// in a lone tier at the front of the sequence.
pub fn group_tiers<'a>(people: &[&'a Person]) -> Vec<Tier<'a>> {
    let (lone, rest) = if people.len() % 2 == 1 {
        (Some(people[0]), &people[1..])
    } else {
        (None, people)
    };

    lone.map(Tier::Single)
        .into_iter()
        .chain(rest.chunks_exact(2).map(|pair| Tier::Pair(pair[0], pair[1])))
        .collect()
}

pub fn tier<'a, R: Rng + ?Sized>(people: &'a [Person], rng: &mut R) -> Vec<Tier<'a>> {
    group_tiers(&shuffled(people, rng))
}
