//! Behavioural tests for example-data crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering deterministic generation and vocabulary constraints.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use example_data::{
    DEPARTMENTS, ExampleEmployeeSeed, GenerationError, MAX_EMPLOYEES, generate_example_employees,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding generation inputs and results.
#[derive(Default, ScenarioState)]
struct World {
    seed: Slot<u64>,
    count: Slot<usize>,
    generated: Slot<Vec<ExampleEmployeeSeed>>,
    second_generation: Slot<Vec<ExampleEmployeeSeed>>,
    failure: Slot<GenerationError>,
}

impl World {
    fn generate(&self) -> Result<Vec<ExampleEmployeeSeed>, GenerationError> {
        let seed = self.seed.get().expect("seed should be set");
        let count = self.count.get().expect("count should be set");
        generate_example_employees(seed, count)
    }

    fn employees(&self) -> Vec<ExampleEmployeeSeed> {
        self.generated.get().expect("employees should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a seed of {seed:u64} and a count of {count:usize}")]
fn a_seed_and_a_count(world: &World, seed: u64, count: usize) {
    world.seed.set(seed);
    world.count.set(count);
}

// ============================================================================
// When steps
// ============================================================================

#[when("employees are generated")]
fn employees_are_generated(world: &World) {
    let employees = world.generate().expect("generation succeeds");
    world.generated.set(employees);
}

#[when("employees are generated twice")]
fn employees_are_generated_twice(world: &World) {
    let first = world.generate().expect("first generation");
    let second = world.generate().expect("second generation");
    world.generated.set(first);
    world.second_generation.set(second);
}

#[when("generation is attempted")]
fn generation_is_attempted(world: &World) {
    let error = world.generate().expect_err("generation should fail");
    world.failure.set(error);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both generations produce identical employees")]
fn both_generations_produce_identical_employees(world: &World) {
    let second = world
        .second_generation
        .get()
        .expect("second generation should be set");
    assert_eq!(world.employees(), second, "Generations should be deterministic");
}

#[then("the ids run from 1 to {last:u32}")]
fn the_ids_run_from_one_to(world: &World, last: u32) {
    let ids: Vec<u32> = world.employees().iter().map(|employee| employee.id).collect();
    assert_eq!(ids, (1..=last).collect::<Vec<_>>());
}

#[then("every department is one of the known departments")]
fn every_department_is_known(world: &World) {
    let known: HashSet<&str> = DEPARTMENTS.iter().copied().collect();
    for employee in world.employees() {
        assert!(
            known.contains(employee.department.as_str()),
            "Unknown department: {}",
            employee.department
        );
    }
}

#[then("every email is derived from the employee's name")]
fn every_email_is_derived_from_the_name(world: &World) {
    for employee in world.employees() {
        let local_part = employee
            .email
            .split('@')
            .next()
            .expect("email has a local part");
        assert!(
            local_part.contains('.'),
            "Email {} should join first and last name",
            employee.email
        );
        assert!(employee.email.ends_with("@example.com"));
    }
}

#[then("generation fails because too many employees were requested")]
fn generation_fails_with_too_many(world: &World) {
    match world.failure.get() {
        Some(GenerationError::TooManyEmployees { max, .. }) => assert_eq!(max, MAX_EMPLOYEES),
        other => panic!("Expected TooManyEmployees, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Deterministic generation produces identical employees"
)]
fn deterministic_generation_produces_identical_employees(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Generated employees have sequential ids"
)]
fn generated_employees_have_sequential_ids(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Generated employees belong to known departments"
)]
fn generated_employees_belong_to_known_departments(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Oversized requests are rejected"
)]
fn oversized_requests_are_rejected(world: World) {
    let _ = world;
}
