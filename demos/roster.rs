//! Builds a roster of random people, prints it, and looks at the fourth person by variant.
//!
//! Set `RUST_LOG=debug` to see the people being generated.

roster_rs::prelude! {
    repr::Person,
}

const ROSTER_LEN: usize = 8;
const INSPECTED: usize = 3;

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .env()
        .without_timestamps()
        .init()?;

    let mut rng = rand::rng();
    let mut ctx = Ctx::new();
    let mut list = PersonList::with_capacity(ROSTER_LEN);

    println!("generating {} random people...", ROSTER_LEN);
    for _ in 0..ROSTER_LEN {
        list.add(ctx.random_person_with(&mut rng)?);
    }

    println!("\n|==| roster");
    for line in list.to_pretty_string(&ctx)?.lines() {
        println!("| {}", line)
    }
    println!("|==|");

    println!("\nperson #{} of the roster:", INSPECTED + 1);
    let idx = list.at(INSPECTED)?;
    match ctx.get(idx)? {
        Person::Adult(adult) => println!("{}", adult.car(&mut rng)),
        Person::Child(child) => println!("{}", child.game(&mut rng)),
    }

    println!("\n|==| household");
    for line in ctx.to_pretty_string().lines() {
        println!("| {}", line)
    }
    println!("|==|");
    Ok(())
}
