mod common;

use common::WorldBuilder;
use proptest::prelude::*;
use shoal_lib::model::boundary::BoundaryPolicy;
use shoal_lib::model::config::{ParameterSet, WorldConfig};
use shoal_lib::model::world::World;
use shoal_lib::{Domain, Position};

prop_compose! {
    fn arb_params()(
        base_speed in 0.01f64..=1.0,
        max_speed in 0.01f64..=2.0,
        orbit_distance in 20.0f64..=150.0
    ) -> ParameterSet {
        ParameterSet { base_speed, max_speed, orbit_distance }
    }
}

prop_compose! {
    fn arb_pointer()(
        present in any::<bool>(),
        x in 0.0f64..600.0,
        y in 0.0f64..400.0
    ) -> Option<Position> {
        present.then_some(Position::new(x, y))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_invariants_hold_for_any_parameters(
        seed in any::<u64>(),
        params in arb_params(),
        pointer in arb_pointer(),
        followers in 0usize..=20
    ) {
        let config = WorldConfig {
            agent_count: 20,
            follower_count: followers,
            ..WorldConfig::default()
        };
        let mut world = World::from_seed(&config, seed).unwrap();
        world.set_pointer(pointer);

        for _ in 0..120 {
            world.tick(&params);
            for agent in &world.agents {
                let cap = agent.effective_max_speed(params.max_speed);
                prop_assert!(agent.velocity.magnitude() <= cap + 1e-9);
                prop_assert!(world.domain.contains(&agent.position));
            }
            prop_assert!(world.validate().is_ok());
        }
    }

    #[test]
    fn test_wrap_lands_in_domain(
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
        width in 1.0f64..1000.0,
        height in 1.0f64..1000.0
    ) {
        let domain = Domain::new(width, height);
        let wrapped = domain.wrap(Position::new(x, y));
        prop_assert!(domain.contains(&wrapped));
    }

    #[test]
    fn test_stacked_agents_stay_finite(
        x in 0.0f64..600.0,
        y in 0.0f64..400.0,
        params in arb_params()
    ) {
        let mut world = WorldBuilder::new()
            .with_fish(x, y, 0.0, 0.0)
            .with_fish(x, y, 0.0, 0.0)
            .with_follower(x, y, 0.0, 0.0)
            .with_pointer(x, y)
            .build();
        world.tick(&params);
        prop_assert!(world.validate().is_ok());
    }
}
