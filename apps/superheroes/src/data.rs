use crate::R;
use crate::model::Hero;

static HEROES: [Hero; 6] = [
    Hero::new(
        R::string::HERO1,
        R::string::DESCRIPTION1,
        R::drawable::ANDROID_SUPERHERO1,
    ),
    Hero::new(
        R::string::HERO2,
        R::string::DESCRIPTION2,
        R::drawable::ANDROID_SUPERHERO2,
    ),
    Hero::new(
        R::string::HERO3,
        R::string::DESCRIPTION3,
        R::drawable::ANDROID_SUPERHERO3,
    ),
    Hero::new(
        R::string::HERO4,
        R::string::DESCRIPTION4,
        R::drawable::ANDROID_SUPERHERO4,
    ),
    Hero::new(
        R::string::HERO5,
        R::string::DESCRIPTION5,
        R::drawable::ANDROID_SUPERHERO5,
    ),
    Hero::new(
        R::string::HERO6,
        R::string::DESCRIPTION6,
        R::drawable::ANDROID_SUPERHERO6,
    ),
];

pub struct HeroesRepository;

impl HeroesRepository {
    /// The full data set, in display order.
    pub fn heroes() -> &'static [Hero] {
        &HEROES
    }
}
