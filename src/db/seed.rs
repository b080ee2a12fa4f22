//! Static reference collections.
//!
//! These are the shipped catalog contents; [`super::Database::seed`] inserts
//! them into any collection that is still empty so a fresh server starts
//! with browsable data.

use crate::models::{
    CreateCharacterInput, CreateStoryArcInput, CreateTechniqueInput, PaletteColor, Rank,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn sample_characters() -> Vec<CreateCharacterInput> {
    vec![
        CreateCharacterInput {
            name: "Tanjiro Kamado".to_string(),
            description: "A kind-hearted boy who became a demon slayer to turn his sister \
                          back to human and avenge his family."
                .to_string(),
            breathing: "Water Breathing & Sun Breathing".to_string(),
            rank: Rank::DemonSlayer,
            image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=600&fit=crop".to_string(),
            abilities: strings(&["Enhanced Smell", "Hard Forehead", "Dance of Fire God"]),
            personality: "Compassionate, determined, empathetic".to_string(),
        },
        CreateCharacterInput {
            name: "Nezuko Kamado".to_string(),
            description: "Tanjiro's sister who was turned into a demon but retained her \
                          humanity and fights alongside demon slayers."
                .to_string(),
            breathing: "Blood Demon Art".to_string(),
            rank: Rank::Demon,
            image: "https://images.unsplash.com/photo-1594736797933-d0e501ba2fe6?w=400&h=600&fit=crop".to_string(),
            abilities: strings(&["Size Manipulation", "Pyrokinesis", "Enhanced Strength"]),
            personality: "Protective, caring, fierce when threatened".to_string(),
        },
        CreateCharacterInput {
            name: "Zenitsu Agatsuma".to_string(),
            description: "A cowardly but talented swordsman who can only use his abilities \
                          when unconscious or in extreme fear."
                .to_string(),
            breathing: "Thunder Breathing".to_string(),
            rank: Rank::DemonSlayer,
            image: "https://images.unsplash.com/photo-1580477667995-2b94f8f4286f?w=400&h=600&fit=crop".to_string(),
            abilities: strings(&["First Form Master", "Enhanced Hearing", "Lightning Speed"]),
            personality: "Cowardly, loyal, determined".to_string(),
        },
        CreateCharacterInput {
            name: "Inosuke Hashibira".to_string(),
            description: "A wild and aggressive fighter raised by boars who wears a boar \
                          mask and dual-wields serrated swords."
                .to_string(),
            breathing: "Beast Breathing".to_string(),
            rank: Rank::DemonSlayer,
            image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=600&fit=crop".to_string(),
            abilities: strings(&["Flexible Joints", "Enhanced Touch", "Dual Wielding"]),
            personality: "Hot-headed, competitive, surprisingly caring".to_string(),
        },
        CreateCharacterInput {
            name: "Giyu Tomioka".to_string(),
            description: "The stoic Water Hashira who first encountered Tanjiro and Nezuko, \
                          setting their journey in motion."
                .to_string(),
            breathing: "Water Breathing".to_string(),
            rank: Rank::Hashira,
            image: "https://images.unsplash.com/photo-1566492031773-4f4e44671d66?w=400&h=600&fit=crop".to_string(),
            abilities: strings(&["Dead Calm", "Enhanced Reflexes", "Master Swordsman"]),
            personality: "Reserved, duty-bound, secretly caring".to_string(),
        },
        CreateCharacterInput {
            name: "Shinobu Kocho".to_string(),
            description: "The Insect Hashira who uses poison instead of cutting off demon \
                          heads due to her lack of physical strength."
                .to_string(),
            breathing: "Insect Breathing".to_string(),
            rank: Rank::Hashira,
            image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=400&h=600&fit=crop".to_string(),
            abilities: strings(&["Poison Mastery", "Speed", "Medical Knowledge"]),
            personality: "Cheerful exterior, vengeful interior, intelligent".to_string(),
        },
    ]
}

pub(crate) fn sample_techniques() -> Vec<CreateTechniqueInput> {
    vec![
        CreateTechniqueInput {
            name: "Water Breathing".to_string(),
            description: "A breathing style that mimics water, specifically the flow, \
                          flexibility and adaptability of the liquid."
                .to_string(),
            forms: strings(&[
                "First Form: Water Surface Slash",
                "Second Form: Water Wheel",
                "Third Form: Flowing Dance",
                "Fourth Form: Striking Tide",
                "Fifth Form: Blessed Rain After the Drought",
            ]),
            users: strings(&["Tanjiro Kamado", "Giyu Tomioka", "Urokodaki Sakonji"]),
            color: PaletteColor::Blue,
            element: "💧".to_string(),
        },
        CreateTechniqueInput {
            name: "Thunder Breathing".to_string(),
            description: "A breathing style that mimics lightning, specifically swift \
                          strikes and movements akin to thunder."
                .to_string(),
            forms: strings(&[
                "First Form: Thunderclap and Flash",
                "Second Form: Rice Spirit",
                "Third Form: Thunder Swarm",
                "Fourth Form: Distant Thunder",
                "Fifth Form: Heat Lightning",
            ]),
            users: strings(&["Zenitsu Agatsuma", "Jigoro Kuwajima"]),
            color: PaletteColor::Yellow,
            element: "⚡".to_string(),
        },
        CreateTechniqueInput {
            name: "Beast Breathing".to_string(),
            description: "A self-taught breathing style created by Inosuke, mimicking the \
                          movements and instincts of wild beasts."
                .to_string(),
            forms: strings(&[
                "First Fang: Pierce",
                "Second Fang: Rip and Tear",
                "Third Fang: Devour",
                "Fourth Fang: Slice 'n' Dice",
                "Fifth Fang: Crazy Cutting",
            ]),
            users: strings(&["Inosuke Hashibira"]),
            color: PaletteColor::Brown,
            element: "🐗".to_string(),
        },
        CreateTechniqueInput {
            name: "Insect Breathing".to_string(),
            description: "A breathing style derived from Flower Breathing, using thrusting \
                          and piercing attacks with poison."
                .to_string(),
            forms: strings(&[
                "Butterfly Dance: Caprice",
                "Dance of the Bee Sting: True Flutter",
                "Dance of the Dragonfly: Compound Eye Hexagon",
                "Dance of the Centipede: Hundred-Legged Zigzag",
            ]),
            users: strings(&["Shinobu Kocho", "Kanao Tsuyuri"]),
            color: PaletteColor::Purple,
            element: "🦋".to_string(),
        },
        CreateTechniqueInput {
            name: "Sun Breathing".to_string(),
            description: "The original breathing style from which all other techniques \
                          derive, using the power of the sun."
                .to_string(),
            forms: strings(&[
                "Dance",
                "Clear Blue Sky",
                "Raging Sun",
                "Fake Rainbow",
                "Fire Wheel",
            ]),
            users: strings(&["Yoriichi Tsugikuni", "Tanjiro Kamado"]),
            color: PaletteColor::Red,
            element: "☀️".to_string(),
        },
    ]
}

pub(crate) fn sample_story_arcs() -> Vec<CreateStoryArcInput> {
    vec![
        CreateStoryArcInput {
            title: "Final Selection Arc".to_string(),
            description: "Tanjiro undergoes grueling training and faces the Final Selection \
                          exam to become a demon slayer."
                .to_string(),
            episodes: "Episodes 1-5".to_string(),
            key_events: strings(&[
                "Tanjiro's family massacre",
                "Meeting Giyu Tomioka",
                "Training with Urokodaki",
                "Final Selection survival",
            ]),
            image: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=800&h=400&fit=crop".to_string(),
            order: 1,
        },
        CreateStoryArcInput {
            title: "Kidnapper's Bog Arc".to_string(),
            description: "Tanjiro's first mission leads him to investigate mysterious \
                          disappearances in a small town."
                .to_string(),
            episodes: "Episodes 6-7".to_string(),
            key_events: strings(&[
                "First demon encounter",
                "Saving Kazumi's fiancée",
                "Learning about demon psychology",
                "Meeting the Hand Demon",
            ]),
            image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=400&fit=crop".to_string(),
            order: 2,
        },
        CreateStoryArcInput {
            title: "Asakusa Arc".to_string(),
            description: "In Tokyo, Tanjiro encounters Muzan Kibutsuji and learns more \
                          about the demon who killed his family."
                .to_string(),
            episodes: "Episodes 8-10".to_string(),
            key_events: strings(&[
                "First encounter with Muzan",
                "Meeting Tamayo and Yushiro",
                "Learning about demon transformation",
                "Nezuko's blood sample",
            ]),
            image: "https://images.unsplash.com/photo-1532968952-8c85f16cf50d?w=800&h=400&fit=crop".to_string(),
            order: 3,
        },
        CreateStoryArcInput {
            title: "Tsuzumi Mansion Arc".to_string(),
            description: "Tanjiro teams up with Zenitsu and Inosuke to investigate a \
                          mansion filled with demons."
                .to_string(),
            episodes: "Episodes 11-17".to_string(),
            key_events: strings(&[
                "Meeting Zenitsu and Inosuke",
                "Kyogai's Blood Demon Art",
                "Zenitsu's unconscious fighting",
                "Formation of the trio",
            ]),
            image: "https://images.unsplash.com/photo-1520637836862-4d197d17c207?w=800&h=400&fit=crop".to_string(),
            order: 4,
        },
        CreateStoryArcInput {
            title: "Mount Natagumo Arc".to_string(),
            description: "The trio faces the Lower Five Rui and his spider demon family in \
                          a deadly mountain battle."
                .to_string(),
            episodes: "Episodes 15-21".to_string(),
            key_events: strings(&[
                "Spider demon family",
                "Inosuke vs Mother Spider",
                "Tanjiro vs Rui",
                "Giyu and Shinobu's arrival",
                "Sun Breathing awakening",
            ]),
            image: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800&h=400&fit=crop".to_string(),
            order: 5,
        },
        CreateStoryArcInput {
            title: "Rehabilitation Training Arc".to_string(),
            description: "Recovery and training at the Butterfly Estate with the Hashira \
                          after the Mount Natagumo mission."
                .to_string(),
            episodes: "Episodes 22-26".to_string(),
            key_events: strings(&[
                "Meeting all Hashira",
                "Nezuko's trial",
                "Training with Kanao",
                "Total Concentration Breathing",
                "Preparing for future missions",
            ]),
            image: "https://images.unsplash.com/photo-1518611012118-696072aa579a?w=800&h=400&fit=crop".to_string(),
            order: 6,
        },
    ]
}
