use std::sync::Arc;

use recommender::dataset::{
    read_entity_table, read_interactions, split_train_test, DatasetAssembler, DatasetConfig,
    DatasetError, Interaction,
};
use recommender::vocabulary::{EntityKind, Schemas};

mod common;

fn assembler() -> DatasetAssembler {
    DatasetAssembler::new(
        Arc::new(Schemas::builtin().unwrap()),
        DatasetConfig::default(),
    )
}

fn assemble(
    users: &str,
    restaurants: &str,
    ratings: &str,
) -> Result<recommender::AssembledDataset, DatasetError> {
    let assembler = assembler();
    let schemas = assembler.schemas();
    let users = read_entity_table(users.as_bytes(), &schemas.users)?;
    let restaurants = read_entity_table(restaurants.as_bytes(), &schemas.restaurants)?;
    let interactions = read_interactions(ratings.as_bytes(), schemas)?;
    assembler.assemble(users, restaurants, &interactions)
}

#[test]
fn test_triples_grouped_by_user() {
    let dataset = assemble(common::USERS, common::RESTAURANTS, common::RATINGS).unwrap();
    let mut interactions =
        read_interactions(common::RATINGS.as_bytes(), &Schemas::builtin().unwrap()).unwrap();

    assert_eq!(dataset.len(), 20);
    assert_eq!(dataset.user_train.nrows(), 20);
    assert_eq!(dataset.item_train.nrows(), 20);

    // The trailing U1003 rating moves up next to the other U1003 rows.
    let user_ids = dataset.user_vectors.ids().unwrap();
    interactions.sort_by_key(|i| user_ids.iter().position(|&id| id == i.user_id));
    assert_eq!(interactions[9].user_id, 1003);
    assert_eq!(interactions[9].item_id, 135085);

    for (k, interaction) in interactions.iter().enumerate() {
        assert_eq!(dataset.user_train[[k, 0]], interaction.user_id as f32);
        assert_eq!(dataset.item_train[[k, 0]], interaction.item_id as f32);
        assert_eq!(dataset.y_train[k], interaction.rating);
    }
}

#[test]
fn test_training_rows_match_entity_vectors() {
    let dataset = assemble(common::USERS, common::RESTAURANTS, common::RATINGS).unwrap();
    let user_ids = dataset.user_vectors.ids().unwrap();
    let item_ids = dataset.item_vectors.ids().unwrap();

    for k in 0..dataset.len() {
        let user_id = dataset.user_train[[k, 0]] as i64;
        let row = user_ids.iter().position(|&id| id == user_id).unwrap();
        assert_eq!(dataset.user_train.row(k), dataset.user_vectors.row(row));

        let item_id = dataset.item_train[[k, 0]] as i64;
        let row = item_ids.iter().position(|&id| id == item_id).unwrap();
        assert_eq!(dataset.item_train.row(k), dataset.item_vectors.row(row));
    }
}

#[test]
fn test_entity_vectors_sorted() {
    let dataset = assemble(common::USERS, common::RESTAURANTS, common::RATINGS).unwrap();

    assert_eq!(dataset.num_users(), 6);
    assert_eq!(dataset.num_restaurants(), 5);
    assert_eq!(
        dataset.user_vectors.ids().unwrap(),
        [1001, 1002, 1003, 1004, 1005, 1010]
    );
    assert_eq!(
        dataset.item_vectors.ids().unwrap(),
        [132825, 132951, 134999, 135032, 135085]
    );
    assert_eq!(dataset.num_user_features(), 11);
    assert_eq!(dataset.num_item_features(), 8);
    assert_eq!(dataset.user_features().ncols(), 11);
}

#[test]
fn test_prefixed_ids_sort_as_strings() {
    let users = "userID,smoker,drink_level,dress_preference,ambience,transport,marital_status,hijos,interest,personality,activity,budget
U999,?,?,?,?,?,?,?,?,?,?,?
U1000,?,?,?,?,?,?,?,?,?,?,low
";
    let dataset = assemble(users, common::RESTAURANTS, "userID,placeID,rating\n").unwrap();
    assert_eq!(dataset.user_vectors.ids().unwrap(), [1000, 999]);
    assert!(dataset.is_empty());
}

#[test]
fn test_missing_entity() {
    let ratings = format!("{}U9999,135085,1,1,1\n", common::RATINGS);
    let err = assemble(common::USERS, common::RESTAURANTS, &ratings).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::MissingEntity {
            entity: EntityKind::User,
            id: 9999,
            interaction: 20,
        }
    ));

    let ratings = "userID,placeID,rating\nU1001,111111,2\n";
    assert!(matches!(
        assemble(common::USERS, common::RESTAURANTS, ratings),
        Err(DatasetError::MissingEntity {
            entity: EntityKind::Restaurant,
            id: 111111,
            interaction: 0,
        })
    ));
}

#[test]
fn test_duplicate_entity() {
    let duplicated = format!(
        "{}132825,22.14,puesto de tacos II,?,?,?,?,?,?,?,?,?\n",
        common::RESTAURANTS
    );
    assert!(matches!(
        assemble(common::USERS, &duplicated, common::RATINGS),
        Err(DatasetError::DuplicateEntity {
            entity: EntityKind::Restaurant,
            id: 132825,
        })
    ));
}

#[test]
fn test_unknown_category_aborts_load() {
    let users = common::USERS.replace("eco-friendly", "gaming");
    assert!(matches!(
        assemble(&users, common::RESTAURANTS, common::RATINGS),
        Err(DatasetError::Encode(_))
    ));
}

#[test]
fn test_load_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    common::write_data_dir(dir.path());

    let assembler = DatasetAssembler::new(
        Arc::new(Schemas::builtin().unwrap()),
        DatasetConfig::new(dir.path()),
    );
    let dataset = assembler.load().unwrap();
    assert_eq!(dataset.len(), 20);
    assert_eq!(dataset.num_users(), 6);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let assembler = DatasetAssembler::new(
        Arc::new(Schemas::builtin().unwrap()),
        DatasetConfig::new(dir.path()),
    );
    assert!(matches!(assembler.load(), Err(DatasetError::Io { .. })));
}

#[test]
fn test_split_train_test() {
    let dataset = assemble(common::USERS, common::RESTAURANTS, common::RATINGS).unwrap();

    let (train, test) = split_train_test(&dataset, 0.2, 7).unwrap();
    assert_eq!(test.len(), 4);
    assert_eq!(train.len(), 16);
    assert_eq!(train.user_features.ncols(), 11);
    assert_eq!(train.item_features.ncols(), 8);
    assert_eq!(train.ratings_column().dim(), (16, 1));

    let total: f32 = train.ratings.sum() + test.ratings.sum();
    assert_eq!(total, dataset.y_train.sum());

    let (again, _) = split_train_test(&dataset, 0.2, 7).unwrap();
    assert_eq!(train, again);

    let (all, none) = split_train_test(&dataset, 0.0, 7).unwrap();
    assert_eq!(all.len(), 20);
    assert!(none.is_empty());

    assert!(matches!(
        split_train_test(&dataset, 1.0, 7),
        Err(DatasetError::InvalidSplit(_))
    ));
}

#[test]
fn test_interaction_parsing() {
    let interactions = read_interactions(
        "userID,placeID,rating\nU1077,135085,2\n".as_bytes(),
        &Schemas::builtin().unwrap(),
    )
    .unwrap();
    assert_eq!(
        interactions,
        vec![Interaction {
            user_id: 1077,
            item_id: 135085,
            rating: 2.0
        }]
    );
}
