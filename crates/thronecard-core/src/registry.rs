//! Entity registry
//!
//! Closed enumerations of every crown, weapon, enemy, character, and mutation
//! a run record may reference. Each entity maps to one canonical display name
//! which doubles as its image file name. Adding a variant extends the set;
//! call sites never change.
//!
//! Lookups go through [`from_name`](Character::from_name): an identifier
//! outside the set fails with [`CardError::UnknownEntity`] at this boundary
//! instead of leaking an unresolved name into a file path.

use serde::{Deserialize, Serialize};

use crate::catalog::ResourceCategory;
use crate::error::{CardError, CardResult};

macro_rules! entity_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $category:expr, {
            $($variant:ident => $display:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants in the set
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Resource category this entity resolves under
            pub const CATEGORY: ResourceCategory = $category;

            /// Canonical display name, also the image file stem
            pub fn display_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $display),+
                }
            }

            /// Look up a variant by its canonical display name
            pub fn from_name(name: &str) -> CardResult<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|entity| entity.display_name() == name)
                    .ok_or_else(|| CardError::unknown(Self::CATEGORY, name))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.display_name())
            }
        }
    };
}

entity_enum!(
    /// Playable characters
    Character,
    ResourceCategory::Character,
    {
        Fish => "Fish",
        Crystal => "Crystal",
        Eyes => "Eyes",
        Melting => "Melting",
        Plant => "Plant",
        YungVenuz => "Yung Venuz",
        Steroids => "Steroids",
        Robot => "Robot",
        Chicken => "Chicken",
        Rebel => "Rebel",
        Horror => "Horror",
        Rogue => "Rogue",
        Skeleton => "Skeleton",
        Frog => "Frog",
    }
);

entity_enum!(
    /// Crowns carried through a run
    Crown,
    ResourceCategory::Crown,
    {
        BareHead => "Bare Head",
        Death => "Crown of Death",
        Haste => "Crown of Haste",
        Guns => "Crown of Guns",
        Hatred => "Crown of Hatred",
        Blood => "Crown of Blood",
        Love => "Crown of Love",
        Luck => "Crown of Luck",
        Curses => "Crown of Curses",
        Risk => "Crown of Risk",
        Destiny => "Crown of Destiny",
        Protection => "Crown of Protection",
    }
);

entity_enum!(
    /// Weapons, primary and secondary slots alike
    Weapon,
    ResourceCategory::Weapon,
    {
        Revolver => "Revolver",
        AssaultRifle => "Assault Rifle",
        Shotgun => "Shotgun",
        DoubleShotgun => "Double Shotgun",
        Crossbow => "Crossbow",
        AutoCrossbow => "Auto Crossbow",
        Machinegun => "Machinegun",
        Minigun => "Minigun",
        GrenadeLauncher => "Grenade Launcher",
        Bazooka => "Bazooka",
        LaserPistol => "Laser Pistol",
        LaserRifle => "Laser Rifle",
        PlasmaGun => "Plasma Gun",
        LightningPistol => "Lightning Pistol",
        WaveGun => "Wave Gun",
        PopGun => "Pop Gun",
        Flamethrower => "Flamethrower",
        Screwdriver => "Screwdriver",
        Wrench => "Wrench",
        GoldenWrench => "Golden Wrench",
        Sledgehammer => "Sledgehammer",
        Jackhammer => "Jackhammer",
        EnergySword => "Energy Sword",
        BloodLauncher => "Blood Launcher",
    }
);

entity_enum!(
    /// Enemies that can end a run
    Enemy,
    ResourceCategory::Enemy,
    {
        Bandit => "Bandit",
        BigBandit => "Big Bandit",
        Scorpion => "Scorpion",
        GoldenScorpion => "Golden Scorpion",
        Maggot => "Maggot",
        RadMaggot => "Rad Maggot",
        BigMaggot => "Big Maggot",
        Rat => "Rat",
        GreenRat => "Green Rat",
        Gator => "Gator",
        Raven => "Raven",
        Salamander => "Salamander",
        Sniper => "Sniper",
        Assassin => "Assassin",
        Turret => "Turret",
        BigDog => "Big Dog",
    }
);

entity_enum!(
    /// Mutations picked up over a run
    Mutation,
    ResourceCategory::Mutation,
    {
        BackMuscle => "Back Muscle",
        Bloodlust => "Bloodlust",
        BoilingVeins => "Boiling Veins",
        EagleEyes => "Eagle Eyes",
        Euphoria => "Euphoria",
        ExtraFeet => "Extra Feet",
        GammaGuts => "Gamma Guts",
        Hammerhead => "Hammerhead",
        HeavyHeart => "Heavy Heart",
        ImpactWrists => "Impact Wrists",
        LaserBrain => "Laser Brain",
        LastWish => "Last Wish",
        LongArms => "Long Arms",
        LuckyShot => "Lucky Shot",
        OpenMind => "Open Mind",
        PlutoniumHunger => "Plutonium Hunger",
        RabbitPaw => "Rabbit Paw",
        RecycleGland => "Recycle Gland",
        RhinoSkin => "Rhino Skin",
        ScarierFace => "Scarier Face",
        SecondStomach => "Second Stomach",
        SharpTeeth => "Sharp Teeth",
        ShotgunShoulders => "Shotgun Shoulders",
        Stress => "Stress",
        StrongSpirit => "Strong Spirit",
        ThroneButt => "Throne Butt",
        TriggerFingers => "Trigger Fingers",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_roundtrip() {
        for weapon in Weapon::ALL {
            assert_eq!(Weapon::from_name(weapon.display_name()).unwrap(), *weapon);
        }
        for character in Character::ALL {
            assert_eq!(
                Character::from_name(character.display_name()).unwrap(),
                *character
            );
        }
    }

    #[test]
    fn test_unknown_name_fails_at_lookup() {
        let err = Weapon::from_name("Portal Gun").unwrap_err();
        assert_eq!(
            err,
            CardError::UnknownEntity {
                category: ResourceCategory::Weapon,
                name: "Portal Gun".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Names are canonical file stems; "assault rifle.png" is not a file.
        assert!(Weapon::from_name("assault rifle").is_err());
        assert!(Weapon::from_name("Assault Rifle").is_ok());
    }

    #[test]
    fn test_display_names_unique_per_set() {
        let mut names: Vec<_> = Mutation::ALL.iter().map(|m| m.display_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Mutation::ALL.len());
    }

    #[test]
    fn test_display_impl_matches_display_name() {
        assert_eq!(Crown::Haste.to_string(), "Crown of Haste");
        assert_eq!(Character::YungVenuz.to_string(), "Yung Venuz");
    }
}
