//! The Good Parts, Chapter 4: Functions — walkthrough
//!
//! Reproduces the console output annotated in the book's snippets,
//! section by section.
//!
//! Run with: cargo run --example functions_demo

use goodparts_chapter4::section_4_10::{make_adder, make_status_getter};
use goodparts_chapter4::section_4_12::{deentityify, SerialMaker};
use goodparts_chapter4::section_4_14::curry;
use goodparts_chapter4::section_4_15::{fib_naive, fibonacci};
use goodparts_chapter4::section_4_3::{add, Accumulator, Quo};
use goodparts_chapter4::section_4_4::sum;
use goodparts_chapter4::section_4_6::try_it;
use goodparts_chapter4::section_4_8::hanoi;

fn main() {
    println!("=== Chapter 4: Functions ===\n");

    println!("Section 4.3: Invocation");
    println!("{}", "=".repeat(60));
    println!("add(3, 4) = {}", add(3, 4)); // 7

    let mut my_object = Accumulator::new();
    my_object.increment(None);
    println!("after increment():      value = {}", my_object.value()); // 1
    my_object.increment(Some(2));
    println!("after increment(2):     value = {}", my_object.value()); // 3
    my_object.double();
    println!("after double():         value = {}", my_object.value()); // 6

    let my_quo = Quo::new("confused");
    println!("my_quo.get_status() = {}", my_quo.get_status()); // confused

    println!("\nSection 4.4: Arguments");
    println!("{}", "=".repeat(60));
    println!("sum(4, 8, 15, 16, 23, 42) = {}", sum(&[4, 8, 15, 16, 23, 42])); // 108

    println!("\nSection 4.6: Exceptions");
    println!("{}", "=".repeat(60));
    println!("try_it(3, 4)      -> {}", try_it(3.0, 4.0));
    println!("try_it(NaN, 7)    -> {}", try_it(f64::NAN, 7.0));

    println!("\nSection 4.8: Recursion");
    println!("{}", "=".repeat(60));
    for step in hanoi(3, "Src", "Aux", "Dst") {
        println!("{}", step);
    }

    println!("\nSection 4.10: Closure");
    println!("{}", "=".repeat(60));
    let get_status = make_status_getter("amazed");
    println!("get_status() = {}", get_status());
    let mut adder = make_adder(100);
    println!("adder(20) = {}", adder(20));
    println!("adder(3)  = {}", adder(3));

    println!("\nSection 4.12: Module");
    println!("{}", "=".repeat(60));
    println!("deentityify(\"&lt;&quot;&gt;\") = {}", deentityify("&lt;&quot;&gt;"));
    let mut seqer = SerialMaker::new();
    seqer.set_prefix('Q');
    seqer.set_seq(1000);
    println!("seqer.gensym() = {}", seqer.gensym()); // Q1000
    println!("seqer.gensym() = {}", seqer.gensym()); // Q1001

    println!("\nSection 4.14: Curry");
    println!("{}", "=".repeat(60));
    let add1 = curry(add, 1);
    println!("curry(add, 1)(6) = {}", add1(6)); // 7

    println!("\nSection 4.15: Memoization");
    println!("{}", "=".repeat(60));
    let mut memoized = fibonacci();
    for n in 0..=10 {
        println!("// {}: {:>2} (naive {:>2})", n, memoized(n), fib_naive(n as u64));
    }
}
