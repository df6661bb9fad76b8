use assistant_cell::models::Reply;
use assistant_cell::{Responder, Rule};

#[test]
fn test_each_topic_is_reachable() {
    let responder = Responder::ayurveda();
    let cases = [
        ("VATA imbalance", "vata"),
        ("pitta foods?", "pitta"),
        ("Kapha routine", "kapha"),
        ("Which dosha am I", "dosha"),
        ("Benefits of Panchakarma", "panchakarma"),
        ("abhyanga at home", "abhyanga"),
        ("Shirodhara session", "shirodhara"),
        ("Ayurvedic diet recommendations", "diet"),
        ("How to reduce stress naturally?", "stress"),
        ("I have insomnia", "sleep"),
    ];

    for (input, topic) in cases {
        assert_eq!(responder.topic(input), Some(topic), "{}", input);
    }
}

#[test]
fn test_first_match_wins_across_groups() {
    let responder = Responder::ayurveda();

    // treatment before lifestyle
    assert_eq!(responder.topic("abhyanga for sleep"), Some("abhyanga"));
    // diet before stress
    assert_eq!(responder.topic("food for anxiety"), Some("diet"));
    assert_eq!(responder.topic("Best time for meditation"), None);
}

#[test]
fn test_replies_are_deterministic() {
    let responder = Responder::ayurveda();
    assert_eq!(responder.respond("shirodhara"), responder.respond("SHIRODHARA please"));
    assert!(responder
        .respond("shirodhara")
        .content
        .starts_with("Continuous oil pouring on forehead for mental relaxation."));
}

#[test]
fn test_custom_rule_table() {
    let responder = Responder::new(
        vec![Rule::new(
            "long",
            |input| input.len() > 20,
            "That's a long question.",
            &["Shorter please"],
        )],
        Reply {
            content: "Hmm.".to_string(),
            suggestions: vec![],
        },
    );

    assert_eq!(responder.respond("a question that is quite long").content, "That's a long question.");
    assert_eq!(responder.respond("short").content, "Hmm.");
}
