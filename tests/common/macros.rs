/// Asserts every agent is within its speed cap (with float slack).
#[macro_export]
macro_rules! assert_speed_capped {
    ($world:expr, $params:expr) => {
        for (i, agent) in $world.agents.iter().enumerate() {
            let cap = agent.effective_max_speed($params.max_speed);
            let speed = agent.velocity.magnitude();
            assert!(
                speed <= cap + 1e-9,
                "Agent {} speed {} exceeds cap {} at tick {}",
                i,
                speed,
                cap,
                $world.tick
            );
        }
    };
}

/// Asserts every agent lies inside `[0, width) x [0, height)`.
#[macro_export]
macro_rules! assert_contained {
    ($world:expr) => {
        for (i, agent) in $world.agents.iter().enumerate() {
            assert!(
                $world.domain.contains(&agent.position),
                "Agent {} at {:?} escaped {:?} at tick {}",
                i,
                agent.position,
                $world.domain,
                $world.tick
            );
        }
    };
}
