//! Basic headless demonstration of the Space Explorer simulation.
//!
//! Run with: cargo run --example basic_demo

use sx_sim::SpaceSim;

fn main() {
    println!("=== Space Explorer - Simulation Demo ===\n");

    let mut sim = SpaceSim::new(1280.0, 720.0);

    println!("Initial state:");
    print_state(&mut sim);

    // Hold right+down thrust and run for 10 seconds of frames.
    println!("\n--- Thrusting down-right for 600 frames ---\n");
    sim.key_down("ArrowRight");
    sim.key_down("ArrowDown");

    for frame in 0..600 {
        sim.step();

        if (frame + 1) % 120 == 0 {
            println!("--- Frame {} ---", sim.current_frame());
            print_state(&mut sim);
        }
        if sim.is_over() {
            println!("Session ended at frame {}", sim.current_frame());
            break;
        }
    }

    sim.key_up("ArrowRight");
    sim.key_up("ArrowDown");

    // Final snapshot as JSON (what the presentation layer would consume).
    println!("\n=== Final HUD State ===\n");
    let snapshot = sim.snapshot();
    println!(
        "fuel={:.1} oxygen={:.1} visited={}/{} over={}",
        snapshot.fuel,
        snapshot.oxygen,
        snapshot.visited_planets,
        snapshot.total_planets,
        snapshot.game_over
    );
    for mission in &snapshot.missions {
        let mark = if mission.completed { "x" } else { " " };
        println!("  [{}] {}", mark, mission.name);
    }
}

fn print_state(sim: &mut SpaceSim) {
    let snapshot = sim.snapshot();
    if let Some(player) = snapshot.player {
        println!(
            "  player: pos=({:.1}, {:.1}) vel=({:.2}, {:.2})",
            player.x, player.y, player.vx, player.vy
        );
    }
    println!(
        "  fuel={:.1}% oxygen={:.1}% visited={}/{}",
        snapshot.fuel, snapshot.oxygen, snapshot.visited_planets, snapshot.total_planets
    );
    for planet in &snapshot.planets {
        println!(
            "  {}: ({:.0}, {:.0}) r={:.0}{}",
            planet.name,
            planet.x,
            planet.y,
            planet.radius,
            if planet.visited { " [visited]" } else { "" }
        );
    }
    for encounter in &snapshot.encounters {
        println!("  ENCOUNTER: {} - {}", encounter.planet, encounter.fact);
    }
}
