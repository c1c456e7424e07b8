use anyhow::{anyhow, bail};
use fittrack_algos::{
    AdviceEngine, BmiCalculator, FitnessReport, TrendForecaster, WorkoutRecommender,
};
use fittrack_db::ProfileStore;
use fittrack_types::{Advice, Forecast, HistoryEntry, Profile, WorkoutRecommendation};

/// Application layer: loads a profile snapshot from the store and hands it
/// to the engine. Mutations go through the store's read-modify-write.
#[derive(Clone)]
pub struct FitnessTracker {
    pub store: ProfileStore,
}

impl FitnessTracker {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    pub async fn register(&self, user: &str, profile: Profile) -> anyhow::Result<()> {
        if !self.store.insert_new(user, &profile).await? {
            bail!("`{user}` is already registered");
        }

        info!("registered {user} ({})", profile.name);
        Ok(())
    }

    pub async fn profile(&self, user: &str) -> anyhow::Result<Profile> {
        self.store
            .get(user)
            .await?
            .ok_or_else(|| anyhow!("unknown user `{user}`, run `register` first"))
    }

    pub async fn bmi(&self, user: &str) -> anyhow::Result<f64> {
        let profile = self.profile(user).await?;
        Ok(BmiCalculator::for_profile(&profile)?)
    }

    pub async fn recommend(&self, user: &str) -> anyhow::Result<WorkoutRecommendation> {
        let profile = self.profile(user).await?;
        let bmi = BmiCalculator::for_profile(&profile)?;
        Ok(WorkoutRecommender::recommend(profile.goal(), bmi))
    }

    pub async fn predict(&self, user: &str) -> anyhow::Result<Forecast> {
        let profile = self.profile(user).await?;
        Ok(TrendForecaster::from_history(profile.history()).forecast())
    }

    pub async fn advice(&self, user: &str) -> anyhow::Result<Advice> {
        let bmi = self.bmi(user).await?;
        Ok(AdviceEngine::evaluate(bmi))
    }

    pub async fn report(&self, user: &str) -> anyhow::Result<FitnessReport> {
        let profile = self.profile(user).await?;
        Ok(FitnessReport::for_profile(&profile)?)
    }

    pub async fn log_calories(&self, user: &str, calories: f64) -> anyhow::Result<HistoryEntry> {
        self.store
            .update(user, |profile| Ok(profile.log_progress(calories)?))
            .await
    }

    pub async fn update_weight_height(
        &self,
        user: &str,
        weight_kg: f64,
        height_cm: f64,
    ) -> anyhow::Result<()> {
        self.store
            .update(user, |profile| {
                Ok(profile.update_weight_height(weight_kg, height_cm)?)
            })
            .await
    }
}
