use glam::DVec2;
use swept2d::*;

/// Player: lands on ground, bounces off enemies it stomps.
struct Hero {
    body: Body,
    grounded: bool,
    stomps: u32,
    coins: u32,
}

impl Collidable for Hero {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn on_contact(&mut self, contact: Contact) {
        match contact {
            Contact::Terrain { normal: NormalDirection::Up, .. } => self.grounded = true,
            Contact::Mover { normal: NormalDirection::Up } => {
                self.stomps += 1;
                self.body.velocity.y = -500.0;
            }
            Contact::Sensor => self.coins += 1,
            _ => {}
        }
    }
}

/// Walker that turns around when blocked sideways.
struct Enemy {
    body: Body,
}

impl Collidable for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn on_contact(&mut self, contact: Contact) {
        match contact {
            Contact::Terrain { normal: NormalDirection::Left | NormalDirection::Right, .. }
            | Contact::Squeezed { normal: NormalDirection::Left | NormalDirection::Right } => {
                self.body.velocity.x = -self.body.velocity.x;
            }
            _ => {}
        }
    }
}

struct Coin {
    body: Body,
}

impl Collidable for Coin {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let level = Level::from_toml_str(include_str!("platformer.toml"))?;
    let dt = level.resolver.delta_time;
    let handler = CollisionHandler::new(CollisionResolver::new(level.resolver)?);
    let terrain = level.terrain;

    let mut hero = Hero {
        body: Body::new(DVec2::new(40.0, 100.0), DVec2::new(24.0, 32.0))
            .with_hitbox(Aabb::new(4.0, 0.0, 16.0, 32.0))
            .with_gravity(1337.0)
            .with_friction(DVec2::new(0.15, 0.0)),
        grounded: false,
        stomps: 0,
        coins: 0,
    };
    let mut enemies = [Enemy {
        body: Body::new(DVec2::new(400.0, 176.0), DVec2::new(24.0, 24.0))
            .with_velocity(DVec2::new(-80.0, 0.0))
            .with_gravity(1337.0),
    }];
    let mut coins = vec![
        Coin { body: Body::new(DVec2::new(150.0, 170.0), DVec2::new(12.0, 12.0)) },
        Coin { body: Body::new(DVec2::new(270.0, 110.0), DVec2::new(12.0, 12.0)) },
    ];

    for frame in 0..600 {
        // Run right, jump every second when grounded
        hero.body.velocity.x += 60.0;
        if hero.grounded && frame % 60 == 0 {
            hero.body.velocity.y = -520.0;
        }
        hero.grounded = false;

        physics::apply_gravity(std::slice::from_mut(&mut hero), dt);
        physics::apply_gravity(&mut enemies, dt);

        handler.bodies_vs_terrain(&mut enemies, &terrain);
        handler.body_vs_terrain(&mut hero, &terrain);
        handler.body_vs_movers(&mut hero, &mut enemies, &terrain);
        let picked = handler.body_vs_sensors(&mut hero, &mut coins, false);
        let picked: Vec<usize> = picked.iter().map(|c| c.index).collect();
        let mut index = 0;
        coins.retain(|_| {
            let keep = !picked.contains(&index);
            index += 1;
            keep
        });

        physics::apply_movement(std::slice::from_mut(&mut hero), dt);
        physics::apply_movement(&mut enemies, dt);
        physics::apply_friction(std::slice::from_mut(&mut hero));

        if frame % 60 == 0 {
            let p = hero.body.aabb();
            println!(
                "frame {frame:3}: hero=({:7.2},{:7.2}) grounded={} stomps={} coins={} enemy_x={:7.2}",
                p.x, p.y, hero.grounded, hero.stomps, hero.coins, enemies[0].body.position.x
            );
        }
    }

    Ok(())
}
