//! Example preparing and measuring a Bell pair
//!
//! Builds the entangled state (|00⟩ + |11⟩)/√2 out of table-resolved
//! gates, then samples it repeatedly: the two qubits always agree.

use qreg::{GateDef, GateTable, QRegister};
use rand::thread_rng;

fn main() {
    let table = GateTable::with_standard_gates();
    let mut rng = thread_rng();

    println!("=== Bell pair ===\n");

    let mut register = QRegister::new(2).unwrap();
    table
        .get("H")
        .unwrap()
        .apply(&mut register, &[], &[0])
        .unwrap();
    table
        .get("CNOT")
        .unwrap()
        .apply(&mut register, &[], &[0, 1])
        .unwrap();

    println!("Amplitudes after H(0), CNOT(0, 1):");
    for (index, amplitude) in register.amplitudes().iter().enumerate() {
        println!("  |{:02b}⟩  {:.4}", index, amplitude);
    }

    println!("\nSampling 20 freshly prepared pairs:");
    let mut counts = [0usize; 4];
    for _ in 0..20 {
        let mut register = QRegister::new(2).unwrap();
        table
            .get("H")
            .unwrap()
            .apply(&mut register, &[], &[0])
            .unwrap();
        table
            .get("CNOT")
            .unwrap()
            .apply(&mut register, &[], &[0, 1])
            .unwrap();
        let outcome = register.measure_all(&mut rng);
        counts[outcome] += 1;
        print!("{:02b} ", outcome);
    }

    println!("\n\nCounts: 00 × {}, 11 × {}", counts[0b00], counts[0b11]);
    println!("(01 and 10 never occur: the qubits are entangled)");
}
