use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub workout_exercise_id: i32,
    pub set_index: i32,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub rpe: Option<i32>,
    pub is_warmup: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workout_exercises::Entity",
        from = "Column::WorkoutExerciseId",
        to = "super::workout_exercises::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WorkoutExercises,
}

impl Related<super::workout_exercises::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutExercises.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
