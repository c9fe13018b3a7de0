//! Tour of the fluent assertion API: contains chains, occurrence bounds,
//! negation, and reported subject changes.

use std::any::Any;

use attest::{expect, expect_any};

fn main() {
    // Example 1: Simple chains for 90% of use cases
    println!("=== Simple Chains ===");
    expect("hello world").to_contain().value("hello").verify();
    expect("hello world").to_start_with("hello").verify();
    expect(42).is_greater_than(40).verify();
    println!("all simple chains passed");

    // Example 2: Occurrence bounds and case handling
    println!("\n=== Occurrence Bounds ===");
    expect("abc abc abc")
        .to_contain()
        .at_least(2)
        .value("abc")
        .verify();
    expect("Hello World")
        .to_contain()
        .ignoring_case()
        .exactly(1)
        .value("hello")
        .verify();
    println!("bounded chains passed");

    // Example 3: A failing chain, evaluated without panicking
    println!("\n=== Failure Reports ===");
    let result = expect("foo bar")
        .to_contain()
        .at_least(3)
        .value("o")
        .evaluate();
    match result {
        Ok(()) => println!("unexpectedly passed"),
        Err(error) => print!("{}", error),
    }

    // Example 4: Sequence subjects and element predicates
    println!("\n=== Sequences ===");
    expect(vec![1, 2, 3, 4])
        .to_contain_elements()
        .at_least(2)
        .matching("an even number", |n| n % 2 == 0)
        .verify();
    expect(vec!["alpha", "beta"])
        .not_to_contain_elements()
        .value("gamma")
        .verify();
    println!("sequence chains passed");

    // Example 5: Narrowing a dynamically typed subject
    println!("\n=== Subject Changes ===");
    let subject: Box<dyn Any> = Box::new(7_i32);
    expect_any(subject)
        .down_cast_to::<i32>()
        .build_with(|ctx| ctx.is_greater_than(5))
        .verify();
    println!("down-cast chain passed");
}
