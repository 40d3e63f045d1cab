use chrono::{Datelike, Local, Weekday};

use crate::types::rosary_data::{Mystery, MysteryType, Prayer, PrayerKey};

// Texts are kept exactly as published; the blank line inside the sign of the
// cross separates it from the creed and the display splits on it.
const SIGN_OF_CROSS: Prayer = Prayer {
    name: "Señal de la Cruz y Credo",
    text: "Por la señal de la Santa Cruz, de nuestros enemigos, líbranos Señor, Dios nuestro. En el nombre del Padre, y del Hijo, y del Espíritu Santo. Amén.\n\nCreo en Dios, Padre todopoderoso, Creador del cielo y de la tierra. Creo en Jesucristo, su único Hijo, nuestro Señor, que fue concebido por obra y gracia del Espíritu Santo, nació de Santa María Virgen, padeció bajo el poder de Poncio Pilato, fue crucificado, muerto y sepultado, descendió a los infiernos, al tercer día resucitó de entre los muertos, subió a los cielos y está sentado a la derecha de Dios, Padre todopoderoso. Desde allí ha de venir a juzgar a vivos y muertos. Creo en el Espíritu Santo, la santa Iglesia católica, la comunión de los santos, el perdón de los pecados, la resurrección de la carne y la vida eterna. Amén.",
};

const APOSTLES_CREED: Prayer = Prayer {
    name: "Credo de los Apóstoles",
    text: "Creo en Dios, Padre todopoderoso, Creador del cielo y de la tierra. Creo en Jesucristo, su único Hijo, nuestro Señor, que fue concebido por obra y gracia del Espíritu Santo, nació de Santa María Virgen, padeció bajo el poder de Poncio Pilato, fue crucificado, muerto y sepultado, descendió a los infiernos, al tercer día resucitó de entre los muertos, subió a los cielos y está sentado a la derecha de Dios, Padre todopoderoso. Desde allí ha de venir a juzgar a vivos y muertos. Creo en el Espíritu Santo, la santa Iglesia católica, la comunión de los santos, el perdón de los pecados, la resurrección de la carne y la vida eterna. Amén.",
};

const OUR_FATHER: Prayer = Prayer {
    name: "Padrenuestro",
    text: "Padre nuestro, que estás en el cielo, santificado sea tu Nombre; venga a nosotros tu reino; hágase tu voluntad, en la tierra como en el cielo. Danos hoy nuestro pan de cada día; perdona nuestras ofensas, como también nosotros perdonamos a los que nos ofenden; no nos dejes caer en la tentación, y líbranos del mal. Amén.",
};

const HAIL_MARY: Prayer = Prayer {
    name: "Avemaría",
    text: "Dios te salve, María, llena eres de gracia, el Señor es contigo. Bendita tú eres entre todas las mujeres, y bendito es el fruto de tu vientre, Jesús. Santa María, Madre de Dios, ruega por nosotros, pecadores, ahora y en la hora de nuestra muerte. Amén.",
};

const GLORY_BE: Prayer = Prayer {
    name: "Gloria",
    text: "Gloria al Padre, y al Hijo, y al Espíritu Santo. Como era en el principio, ahora y siempre, por los siglos de los siglos. Amén.",
};

const FATIMA_PRAYER: Prayer = Prayer {
    name: "Jaculatoria de Fátima",
    text: "Oh, Jesús mío, perdona nuestros pecados, líbranos del fuego del infierno, lleva al cielo a todas las almas, especialmente a las más necesitadas de tu misericordia. Amén.",
};

const HAIL_HOLY_QUEEN: Prayer = Prayer {
    name: "La Salve",
    text: "Dios te salve, Reina y Madre de misericordia, vida, dulzura y esperanza nuestra. Dios te salve. A ti llamamos los desterrados hijos de Eva; a ti suspiramos, gimiendo y llorando, en este valle de lágrimas. Ea, pues, Señora, abogada nuestra, vuelve a nosotros esos tus ojos misericordiosos; y después de este destierro, muéstranos a Jesús, fruto bendito de tu vientre. ¡Oh clementísima, oh piadosa, oh dulce Virgen María! Ruega por nosotros, Santa Madre de Dios, para que seamos dignos de alcanzar las promesas de Nuestro Señor Jesucristo. Amén.",
};

const FINAL_PRAYER: Prayer = Prayer {
    name: "Oración Final",
    text: "Bajo tu amparo nos acogemos, Santa Madre de Dios; no desprecies las súplicas que te dirigimos en nuestras necesidades, antes bien, líbranos de todos los peligros, ¡oh Virgen gloriosa y bendita! Amén.",
};

const JOYFUL: [Mystery; 5] = [
    Mystery { name: "Primer Misterio Gozoso", announcement: "La Anunciación del Ángel a María." },
    Mystery { name: "Segundo Misterio Gozoso", announcement: "La Visitación de María a su prima Isabel." },
    Mystery { name: "Tercer Misterio Gozoso", announcement: "El Nacimiento del Niño Jesús en Belén." },
    Mystery { name: "Cuarto Misterio Gozoso", announcement: "La Presentación de Jesús en el Templo." },
    Mystery { name: "Quinto Misterio Gozoso", announcement: "El Niño Jesús perdido y hallado en el Templo." },
];

const LUMINOUS: [Mystery; 5] = [
    Mystery { name: "Primer Misterio Luminoso", announcement: "El Bautismo de Jesús en el Jordán." },
    Mystery { name: "Segundo Misterio Luminoso", announcement: "La autorrevelación de Jesús en las bodas de Caná." },
    Mystery { name: "Tercer Misterio Luminoso", announcement: "El anuncio del Reino de Dios invitando a la conversión." },
    Mystery { name: "Cuarto Misterio Luminoso", announcement: "La Transfiguración de Jesús." },
    Mystery { name: "Quinto Misterio Luminoso", announcement: "La Institución de la Eucaristía." },
];

const SORROWFUL: [Mystery; 5] = [
    Mystery { name: "Primer Misterio Doloroso", announcement: "La Oración de Jesús en el Huerto de Getsemaní." },
    Mystery { name: "Segundo Misterio Doloroso", announcement: "La Flagelación de Jesús atado a la columna." },
    Mystery { name: "Tercer Misterio Doloroso", announcement: "La Coronación de espinas." },
    Mystery { name: "Cuarto Misterio Doloroso", announcement: "Jesús con la Cruz a cuestas camino del Calvario." },
    Mystery { name: "Quinto Misterio Doloroso", announcement: "La Crucifixión y Muerte de Nuestro Señor." },
];

const GLORIOUS: [Mystery; 5] = [
    Mystery { name: "Primer Misterio Glorioso", announcement: "La Resurrección del Señor." },
    Mystery { name: "Segundo Misterio Glorioso", announcement: "La Ascensión del Señor a los Cielos." },
    Mystery { name: "Tercer Misterio Glorioso", announcement: "La Venida del Espíritu Santo sobre los Apóstoles." },
    Mystery { name: "Cuarto Misterio Glorioso", announcement: "La Asunción de Nuestra Señora a los Cielos." },
    Mystery { name: "Quinto Misterio Glorioso", announcement: "La Coronación de María como Reina de Cielos y Tierra." },
];

pub fn prayer(key: PrayerKey) -> &'static Prayer {
    match key {
        PrayerKey::SignOfCross => &SIGN_OF_CROSS,
        PrayerKey::OurFather => &OUR_FATHER,
        PrayerKey::HailMary => &HAIL_MARY,
        PrayerKey::GloryBe => &GLORY_BE,
        PrayerKey::FatimaPrayer => &FATIMA_PRAYER,
        PrayerKey::HailHolyQueen => &HAIL_HOLY_QUEEN,
        PrayerKey::FinalPrayer => &FINAL_PRAYER,
        PrayerKey::ApostlesCreed => &APOSTLES_CREED,
    }
}

/// The five mysteries of a set, in recitation order.
pub fn mysteries(kind: MysteryType) -> &'static [Mystery; 5] {
    match kind {
        MysteryType::Joyful => &JOYFUL,
        MysteryType::Luminous => &LUMINOUS,
        MysteryType::Sorrowful => &SORROWFUL,
        MysteryType::Glorious => &GLORIOUS,
    }
}

/// Panics when `index` is not 0..5. Indices only come from the sequence
/// builder, so an out-of-range value is a construction bug.
pub fn mystery(kind: MysteryType, index: usize) -> &'static Mystery {
    &mysteries(kind)[index]
}

/// The set traditionally prayed on the given weekday.
pub fn recommended_for(day: Weekday) -> MysteryType {
    match day {
        Weekday::Mon | Weekday::Sat => MysteryType::Joyful,
        Weekday::Tue | Weekday::Fri => MysteryType::Sorrowful,
        Weekday::Wed | Weekday::Sun => MysteryType::Glorious,
        Weekday::Thu => MysteryType::Luminous,
    }
}

pub fn recommended_today() -> MysteryType {
    let today = Local::now().weekday();
    let kind = recommended_for(today);
    log::debug!("Recommended mysteries for {:?}: {:?}", today, kind);
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_table_matches_tradition() {
        assert_eq!(recommended_for(Weekday::Mon), MysteryType::Joyful);
        assert_eq!(recommended_for(Weekday::Sat), MysteryType::Joyful);
        assert_eq!(recommended_for(Weekday::Tue), MysteryType::Sorrowful);
        assert_eq!(recommended_for(Weekday::Fri), MysteryType::Sorrowful);
        assert_eq!(recommended_for(Weekday::Wed), MysteryType::Glorious);
        assert_eq!(recommended_for(Weekday::Sun), MysteryType::Glorious);
        assert_eq!(recommended_for(Weekday::Thu), MysteryType::Luminous);
    }

    #[test]
    fn every_set_has_five_named_mysteries() {
        for kind in MysteryType::ALL {
            let set = mysteries(kind);
            assert_eq!(set.len(), 5);
            assert!(set.iter().all(|m| !m.name.is_empty() && !m.announcement.is_empty()));
        }
        assert_eq!(mystery(MysteryType::Joyful, 0).name, "Primer Misterio Gozoso");
        assert_eq!(mystery(MysteryType::Glorious, 4).announcement, "La Coronación de María como Reina de Cielos y Tierra.");
    }

    #[test]
    #[should_panic]
    fn mystery_index_past_the_fifth_is_a_bug() {
        let _ = mystery(MysteryType::Luminous, 5);
    }

    #[test]
    fn sign_of_cross_keeps_the_blank_line_before_the_creed() {
        let text = prayer(PrayerKey::SignOfCross).text;
        assert!(text.contains("Amén.\n\nCreo en Dios"));
        assert_eq!(prayer(PrayerKey::SignOfCross).name, "Señal de la Cruz y Credo");
    }

    #[test]
    fn every_key_has_text() {
        for key in PrayerKey::ALL {
            let p = prayer(key);
            assert!(!p.name.is_empty());
            assert!(p.text.ends_with("Amén."));
        }
    }
}
