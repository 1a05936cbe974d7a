//! Example defining and reusing a parameterized composite gate
//!
//! Builds a general single-qubit rotation Rz(φ)·Ry(θ)·Rz(λ) as a
//! composite with three call-time parameter slots, registers it under a
//! name, and invokes it with different angles.

use qreg::{CompositeGate, GateDef, GateTable, ParamSpec, QRegister};
use std::f64::consts::PI;

fn main() {
    let mut table = GateTable::with_standard_gates();

    // Slot 0 = θ, slot 1 = φ, slot 2 = λ; one qubit argument
    let mut u3 = CompositeGate::new(3, 1).unwrap();
    u3.add_instruction(table.get("Rz").unwrap(), &[ParamSpec::Slot(2)], &[0])
        .unwrap();
    u3.add_instruction(table.get("Ry").unwrap(), &[ParamSpec::Slot(0)], &[0])
        .unwrap();
    u3.add_instruction(table.get("Rz").unwrap(), &[ParamSpec::Slot(1)], &[0])
        .unwrap();
    table.register_composite("U3", u3);

    println!("=== Composite rotation U3(θ, φ, λ) ===\n");

    let u3 = table.get("U3").unwrap();
    for (theta, phi, lambda) in [(PI / 2.0, 0.0, PI), (PI / 4.0, PI / 4.0, 0.0)] {
        let mut register = QRegister::new(2).unwrap();
        u3.apply(&mut register, &[theta, phi, lambda], &[0]).unwrap();

        println!("U3({:.3}, {:.3}, {:.3}) |00⟩:", theta, phi, lambda);
        for (index, probability) in register.probabilities().iter().enumerate() {
            if *probability > 1e-12 {
                println!("  |{:02b}⟩ with probability {:.4}", index, probability);
            }
        }
        println!();
    }
}
